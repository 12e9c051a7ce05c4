//! Mathematical morphology for mask refinement
//!
//! - **Erosion**: minimum filter (shrinks flagged regions)
//! - **Dilation**: maximum filter (grows flagged regions)
//! - **Opening**: erosion then dilation (removes small flagged speckle)
//! - **Buffering**: grows flagged regions by a fixed right-angle distance
//!   using a diamond stencil, stamping the source value

mod buffer;
mod dilate;
mod element;
mod erode;
mod opening;

pub use buffer::{buffer_mask, BufferMask, BufferParams};
pub use dilate::{dilate, Dilate, DilateParams};
pub use element::StructuringElement;
pub use erode::{erode, Erode, ErodeParams};
pub use opening::{opening, Opening, OpeningParams};
