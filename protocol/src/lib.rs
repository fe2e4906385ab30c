//! Value types shared between the components of the Caravel test stand
//!
//! Nothing in here knows about a specific simulator. The types describe what
//! the host observes on the chip's pins, and can be used by any environment
//! that drives a Caravel instance.


#![no_std]


extern crate alloc;


pub mod bus;
pub mod gpio;
pub mod pin;
pub mod signal;


pub use self::{
    bus::BusValue,
    gpio::{
        GpioMode,
        GPIO_COUNT,
    },
    pin::Logic,
};
