// Window Domain Layer

pub mod badge;
pub mod content_scripts;
pub mod context_menu;
pub mod entities;
pub mod events;
pub mod navigation;
pub mod permissions;
pub mod value_objects;

pub use badge::*;
pub use content_scripts::*;
pub use context_menu::*;
pub use entities::*;
pub use events::*;
pub use navigation::*;
pub use permissions::*;
pub use value_objects::*;
