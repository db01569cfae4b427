//! One handler per subcommand. Handlers load data through the context,
//! call a presenter to shape it, and hand the view model to the
//! renderer. Policy decisions (unknown id is an error, check fails the
//! process on errors) live here and nowhere else.

pub mod blog;
pub mod browse;
pub mod content;
pub mod gallery;
pub mod guidance;
pub mod home;
pub mod init;
pub mod night;
pub mod tags;
