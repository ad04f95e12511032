pub mod details;
pub mod form;
pub mod list;
pub mod sequence;

pub use details::FilmPosterDetails;
pub use form::FilmPosterForm;
pub use list::FilmPosterList;
pub use sequence::FilmPosterSequence;
