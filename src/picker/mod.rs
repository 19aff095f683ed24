pub mod dropdown;
pub mod menu;

pub use dropdown::ComponentDropdown;
pub use menu::{MenuNode, MenuTree};
