/// Shared data structures for the portfolio
///
/// These structs are what flows between the remote project store,
/// the view model and the UI layer.

use serde::{Deserialize, Deserializer, Serialize};

/// A single portfolio entry
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Stable identifier chosen when the project was authored (e.g. "pink-dress")
    pub id: String,
    pub title: String,
    /// Display string, not a number ("2023")
    pub year: String,
    pub description: String,
    /// Image shown in the grid. The store sends "" for "no cover".
    #[serde(default, deserialize_with = "empty_as_none")]
    pub cover: Option<String>,
    /// Gallery images in display order, newest last
    #[serde(default)]
    pub images: Vec<String>,
}

impl Project {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        year: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: year.into(),
            description: description.into(),
            cover: None,
            images: Vec::new(),
        }
    }

    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Image to show in the grid: the cover, else the first gallery image
    pub fn thumbnail(&self) -> Option<&str> {
        self.cover
            .as_deref()
            .or_else(|| self.images.first().map(String::as_str))
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Returns the id of the first project whose id appears earlier in the list
pub fn find_duplicate_id(projects: &[Project]) -> Option<&str> {
    let mut seen = std::collections::HashSet::new();
    projects
        .iter()
        .find(|p| !seen.insert(p.id.as_str()))
        .map(|p| p.id.as_str())
}

const CDN: &str = "https://cdn.poehali.dev/projects/d06bc7b2-909d-4086-acb0-64c61016a4de/files";

/// The fixed project list the site ships with
///
/// Used to seed an empty store, and as the fallback when the store
/// cannot be reached.
pub fn builtin_projects() -> Vec<Project> {
    let pink = format!("{}/f861db0c-19a3-4663-8821-997f8359715f.jpg", CDN);
    let lubyanka = format!("{}/d5f53d2e-a152-4e5e-a33c-524734e47d03.jpg", CDN);
    let lavr = format!("{}/23ede909-1acd-4253-8c82-715ba1db7b62.jpg", CDN);

    vec![
        Project::new(
            "pink-dress",
            "Розовое платье",
            "2023",
            "Современная постановка о женской идентичности и самовыражении через театральный костюм.",
        )
        .with_cover(pink.clone())
        .with_images([pink]),
        Project::new(
            "lubyanka-makeup",
            "Лубянский Гримёр",
            "2022",
            "Историческая драма о судьбе театрального гримёра в период политических репрессий.",
        )
        .with_cover(lubyanka.clone())
        .with_images([lubyanka]),
        Project::new(
            "lavr",
            "Лавр",
            "2023",
            "Адаптация романа Евгения Водолазкина о духовном пути средневекового лекаря.",
        )
        .with_cover(lavr.clone())
        .with_images([lavr]),
        Project::new(
            "king",
            "Я убил царя",
            "2022",
            "Постановка о последних днях императорской семьи и моральном выборе.",
        ),
        Project::new(
            "aesop",
            "Эзоп",
            "2021",
            "Философская притча о создателе басен, его мудрости и трагической судьбе.",
        ),
        Project::new(
            "crime",
            "Преступление и Наказание",
            "2023",
            "Визуальная интерпретация классического романа Достоевского для современной сцены.",
        ),
    ]
}
