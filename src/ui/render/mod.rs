mod all;
mod celebration;
mod clock;
mod footer;
mod input;
mod log;
mod motivations;
mod tasks;
mod timezone;
mod weather;

use self::log::log;
use super::*;
use celebration::celebration;
use clock::clock;
use footer::footer;
use input::input;
use motivations::motivations;
use tasks::tasks;
use timezone::timezone;
use weather::{advice, weather};

pub use all::all as render;
