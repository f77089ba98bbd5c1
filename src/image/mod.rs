pub mod canvas;
pub mod io;
pub mod surface;
pub mod traits;

pub use self::canvas::Canvas;
pub use self::surface::Surface;
pub use self::traits::{ImageView, ImageViewMut, Rows};
