//! UI rendering modules for the font manager.
//!
//! - `nav`: Navigation side panel and header bar
//! - `pages`: Library, upload, try and view pages
//! - `stylesheet`: Window showing the generated `@font-face` CSS
//! - `theme`: Color schemes and styling utilities
//! - `toasts`: Floating notifications

pub mod nav;
pub mod pages;
pub mod stylesheet;
pub mod theme;
pub mod toasts;

pub use pages::PageAction;
pub use theme::TypesetTheme;
