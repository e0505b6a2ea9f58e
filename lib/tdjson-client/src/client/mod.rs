// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
mod auth;
mod bots;
mod client;
mod files;
mod messages;
mod net;
mod options;
mod pages;
mod polls;
mod updates;

pub use auth::SignInError;
pub use client::{Client, Config, InitParams};
pub(crate) use client::ClientInner;
pub use updates::Updates;
