//! Plot rendering for `MeasureApp`.
//!
//! - draws the image at the current scale/offset
//! - draws point markers, connecting segments and distance labels
//! - routes clicks and wheel zoom to the session
//!
//! Plot y is the negated display y, so image row 0 stays at the top.

use eframe::egui;
use egui::{Align2, RichText};
use egui_plot::{Line, Plot, PlotImage, PlotPoint, PlotResponse, Points, Text};

use crate::data::scene::Scene;
use crate::data::view::{display_to_plot as to_plot, plot_to_display, ScrollDirection};

use super::MeasureApp;

fn to_display(plot: PlotPoint) -> [f64; 2] {
    plot_to_display([plot.x, plot.y])
}

impl MeasureApp {
    /// Render the central plot and apply the frame's pointer input.
    pub(super) fn render_central_plot_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let plot_response = self.plot_scene(ui, ctx);
            // Resolve before input can change the view this frame was drawn with.
            let drawn_view = *self.session.view();
            self.hover_pixel = plot_response.inner.map(|d| drawn_view.image_point(d));
            self.handle_plot_click(ctx, &plot_response);
            self.handle_plot_scroll(ctx, &plot_response);
        });
    }

    /// Full redraw of the current session. Returns the hovered display position.
    fn plot_scene(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
    ) -> PlotResponse<Option<[f64; 2]>> {
        let scene = Scene::build(&self.session);
        let texture = self.texture_id(ctx);
        let look = self.look.clone();

        let plot = Plot::new("measure_plot")
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false);

        plot.show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(scene.x_range[0]..=scene.x_range[1]);
            plot_ui.set_plot_bounds_y(-scene.y_range[1]..=-scene.y_range[0]);

            let [cx, cy] = to_plot(scene.center());
            let [w, h] = scene.size();
            plot_ui.image(PlotImage::new(
                "image",
                texture,
                PlotPoint::new(cx, cy),
                egui::vec2(w as f32, h as f32),
            ));

            for seg in &scene.segments {
                plot_ui.line(
                    Line::new("segment", vec![to_plot(seg.from), to_plot(seg.to)])
                        .color(look.line_color)
                        .width(look.line_width),
                );
                let [mx, my] = to_plot(seg.midpoint);
                plot_ui.text(
                    Text::new(
                        "distance",
                        PlotPoint::new(mx, my),
                        RichText::new(seg.label.as_str())
                            .size(look.label_size)
                            .color(look.label_color),
                    )
                    .anchor(Align2::LEFT_BOTTOM),
                );
            }

            if !scene.markers.is_empty() {
                let pts: Vec<[f64; 2]> = scene.markers.iter().copied().map(to_plot).collect();
                plot_ui.points(
                    Points::new("points", pts)
                        .radius(look.marker_radius)
                        .filled(true)
                        .color(look.marker_color),
                );
            }

            plot_ui.pointer_coordinate().map(to_display)
        })
    }

    fn handle_plot_click(
        &mut self,
        ctx: &egui::Context,
        plot_response: &PlotResponse<Option<[f64; 2]>>,
    ) {
        if !plot_response.response.clicked() {
            return;
        }
        let display = plot_response
            .response
            .interact_pointer_pos()
            .map(|pos| to_display(plot_response.transform.value_from_position(pos)));
        if self.session.on_click(display) {
            ctx.request_repaint();
        }
    }

    fn handle_plot_scroll(
        &mut self,
        ctx: &egui::Context,
        plot_response: &PlotResponse<Option<[f64; 2]>>,
    ) {
        if !plot_response.response.hovered() {
            return;
        }
        let scroll = ctx.input(|i| i.raw_scroll_delta);
        let direction = ScrollDirection::from_wheel_delta(scroll.y);
        if direction.is_none() {
            return;
        }
        if self.session.on_scroll(direction, plot_response.inner) {
            ctx.request_repaint();
        }
    }
}
