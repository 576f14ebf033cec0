//! gui/subscription.rs
//! Session polling timer + window close requests.
//!
//! The timer only exists while `state.polling` is true. Once `Shutdown`
//! flips it, iced drops the timer stream, so no tick fires afterwards.

use iced::{Subscription, time, window};

use super::state::{Kiosk, Message};

pub(crate) fn subscription(state: &Kiosk) -> Subscription<Message> {
    let close = window::close_requests().map(|_| Message::Shutdown);

    if !state.polling {
        return close;
    }

    let poll = time::every(state.poll_interval).map(|_| Message::PollTick);
    Subscription::batch([close, poll])
}
