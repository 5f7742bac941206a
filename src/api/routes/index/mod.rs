mod router;

pub use router::{render_index, router, templates};
