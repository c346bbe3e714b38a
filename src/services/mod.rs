pub mod swatch_page;

pub use swatch_page::SwatchPage;
