pub mod installation;
pub mod package;

pub use installation::Installation;
pub use package::{Package, PackageName};
