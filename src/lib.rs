mod core;
mod r_bindings;
mod utils;

use extendr_api::prelude::*;

pub use r_bindings::r_base::r_triangle;

extendr_module! {
    mod trifold;
    use r_triangle;
}
