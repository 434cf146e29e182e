/// Portfolio editor core
///
/// Everything the desktop shell needs that is not drawing:
/// - `media` - image intake (decode, downsize, re-encode as JPEG data URI)
/// - `remote` - HTTP clients for the project store and the upload endpoint
/// - `state` - the project view model, gallery cursor and notices
/// - `config` - endpoints and intake limits loaded from disk
/// - `error` - error types shared by all of the above

pub mod config;
pub mod error;
pub mod media;
pub mod remote;
pub mod state;

pub use config::Config;
pub use error::{Failure, NormalizeError, RemoteError};
pub use media::normalize::{NormalizeOptions, NormalizedImage};
pub use remote::{Backend, ImageUploader, ProjectStore};
pub use state::data::Project;
pub use state::portfolio::Portfolio;
