mod introspect;
mod json;
mod sdl;

pub use introspect::Introspect;
pub use json::Json;
pub use sdl::Sdl;
