// overlap/web/src/utils.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

pub fn set_panic_hook() {
    // Routes panic messages to `console.error`.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
