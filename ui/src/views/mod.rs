mod home;
mod lesson;
mod not_found;
mod playground;

pub use home::Home;
pub use lesson::Lesson;
pub use not_found::PageNotFound;
pub use playground::Playground;
