// src/gui/components/deal_grid.rs
//
// Draws the card grid from `app.rendered`. Purely a view: clicks are
// collected while drawing and handed to actions afterwards.

use std::time::Instant;

use eframe::egui::{self, RichText};
use crate::{gui::{actions, app::App}, render::Rendered};

const CARD_W: f32 = 230.0;
const IMAGE_H: f32 = 130.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let cards = match &app.rendered {
        Rendered::Placeholder(msg) => {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(msg).italics().weak());
            });
            return;
        }
        Rendered::Cards(cards) => cards,
    };

    let now = Instant::now();
    let mut copy_clicked: Option<usize> = None;

    egui::ScrollArea::vertical()
        .id_salt("deal_grid_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);

                for (ix, card) in cards.iter().enumerate() {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(CARD_W);
                        ui.vertical(|ui| {
                            ui.add(
                                egui::Image::new(image_uri(&card.image_uri))
                                    .max_size(egui::vec2(CARD_W, IMAGE_H))
                                    .maintain_aspect_ratio(true),
                            )
                            .on_hover_text(card.image_alt.as_str());

                            ui.label(RichText::new(&card.title).strong());
                            ui.label(RichText::new(&card.label).small().weak());

                            ui.horizontal(|ui| {
                                ui.hyperlink_to(crate::config::consts::OPEN_DEAL_LABEL, &card.open_href)
                                    .on_hover_text(card.open_href.as_str());

                                let label = card.copy_label(&app.feedback, now);
                                let btn = ui.add_enabled(card.copy.is_enabled(), egui::Button::new(label));
                                if btn.clicked() {
                                    copy_clicked = Some(ix);
                                }
                            });
                        });
                    });
                }
            });
        });

    if let Some(ix) = copy_clicked {
        actions::copy(app, ix);
    }
}

/// Bare paths (like the placeholder) go through egui's file loader.
pub fn image_uri(raw: &str) -> String {
    if raw.contains("://") || raw.starts_with("data:") || raw.starts_with("bytes:") {
        s!(raw)
    } else {
        join!("file://", raw)
    }
}

#[cfg(test)]
mod tests {
    use super::image_uri;

    #[test]
    fn uris() {
        assert_eq!(image_uri("placeholder.png"), "file://placeholder.png");
        assert_eq!(image_uri("https://img.example/a.jpg"), "https://img.example/a.jpg");
        assert_eq!(image_uri("file:///tmp/a.png"), "file:///tmp/a.png");
    }
}
