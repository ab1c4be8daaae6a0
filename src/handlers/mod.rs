pub mod dirs;
pub mod new;
