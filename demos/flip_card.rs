// SPDX-License-Identifier: MPL-2.0
//! Minimal host application embedding the `FlipCard` widget.
//!
//! Usage:
//!   cargo run --example flip_card -- --back B.png --front A.png [--duration 0.3]
//!
//! Started without image arguments the card renders an empty surface and taps
//! are no-ops, which is the widget's degraded behavior for unset faces.

use flip_card::media;
use flip_card::ui::card::{FlipCard, Message};
use iced::widget::center;
use iced::{Element, Subscription};
use std::path::PathBuf;
use std::time::{Duration, Instant};

struct Demo {
    card: FlipCard,
}

impl Demo {
    fn update(&mut self, message: Message) {
        self.card.update(message);
    }

    fn view(&self) -> Element<'_, Message> {
        center(self.card.view(Instant::now())).into()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.card.subscription()
    }
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let back: Option<PathBuf> = args.opt_value_from_str("--back").unwrap_or(None);
    let front: Option<PathBuf> = args.opt_value_from_str("--front").unwrap_or(None);
    let duration_secs: Option<f32> = args.opt_value_from_str("--duration").unwrap_or(None);

    let mut card = FlipCard::default();
    if let Some(secs) = duration_secs {
        if secs > 0.0 {
            card.set_flip_duration(Duration::from_secs_f32(secs));
        } else {
            eprintln!("flip_card demo: ignoring non-positive --duration {secs}");
        }
    }
    if let Some(path) = back {
        match media::load_image(&path) {
            Ok(image) => card.set_back(image),
            Err(err) => {
                eprintln!("flip_card demo: failed to load back image: {err}");
                std::process::exit(1);
            }
        }
    }
    if let Some(path) = front {
        match media::load_image(&path) {
            Ok(image) => card.set_front(image),
            Err(err) => {
                eprintln!("flip_card demo: failed to load front image: {err}");
                std::process::exit(1);
            }
        }
    }

    // iced 0.14 requires a Fn boot closure, so the prepared card is cloned in.
    let boot = move || Demo { card: card.clone() };

    iced::application(boot, Demo::update, Demo::view)
        .title("FlipCard demo")
        .subscription(Demo::subscription)
        .window(iced::window::Settings {
            size: iced::Size::new(480.0, 480.0),
            ..Default::default()
        })
        .run()
}
