//! Resume rendering: HTML templating plus a PDF engine that shells out
//! to an external generator binary.

pub mod html;
pub mod labels;
pub mod pdf;

pub use html::{render_html, Template};
pub use labels::Labels;
pub use pdf::{PdfEngine, WkhtmltopdfEngine};
