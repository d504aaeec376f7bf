use std::f64::consts::PI;

use shared::constants::{EUROPEAN_WHEEL, OUTER_RADIUS, POCKET_DEGREES};
use shared::pockets::{pocket_angle, pocket_color, PocketColor};
use shared::wheel_animation::WheelAnimationState;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

// Geometry is in a 500 x 500 space, matching the ball radii.
const CANVAS_SIZE: f64 = 500.0;
const RIM_RADIUS: f64 = 248.0;
const TRACK_INNER_RADIUS: f64 = 215.0;
const LABEL_RADIUS: f64 = 202.0;
const POCKET_OUTER_RADIUS: f64 = 190.0;
const POCKET_INNER_RADIUS: f64 = 140.0;
const BALL_SIZE: f64 = 8.0;

/// Degrees measured clockwise from twelve o'clock, as canvas radians.
fn to_canvas_radians(degrees: f64) -> f64 {
    (degrees - 90.0) * PI / 180.0
}

fn pocket_fill(color: PocketColor) -> &'static str {
    match color {
        PocketColor::Red => "#dc2626",
        PocketColor::Black => "#111827",
        PocketColor::Green => "#16a34a",
    }
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub state: WheelAnimationState,
    pub is_spinning: bool,
    pub winning_number: Option<u8>,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.state.clone(), props.is_spinning, props.winning_number),
            move |(state, is_spinning, winning_number)| {
                if let Some(context) = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(|canvas| canvas.get_context("2d").ok().flatten())
                    .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
                {
                    let highlight = if *is_spinning { None } else { *winning_number };
                    draw_wheel(&context, state, highlight);
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="500"
                height="500"
                class="w-full max-w-[500px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(250, 204, 21, 0.35));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

fn draw_wheel(context: &CanvasRenderingContext2d, state: &WheelAnimationState, highlight: Option<u8>) {
    let center = CANVAS_SIZE / 2.0;
    context.clear_rect(0.0, 0.0, CANVAS_SIZE, CANVAS_SIZE);

    // Rim and ball track
    context.begin_path();
    context.set_fill_style_str("#78350f");
    let _ = context.arc(center, center, RIM_RADIUS, 0.0, 2.0 * PI);
    context.fill();

    context.begin_path();
    context.set_fill_style_str(if is_dark_mode() { "#1f2937" } else { "#374151" });
    let _ = context.arc(center, center, RIM_RADIUS - 8.0, 0.0, 2.0 * PI);
    context.fill();

    context.begin_path();
    context.set_fill_style_str("#92400e");
    let _ = context.arc(center, center, TRACK_INNER_RADIUS, 0.0, 2.0 * PI);
    context.fill();

    // Everything below turns with the wheel.
    context.save();
    let _ = context.translate(center, center);
    let _ = context.rotate(state.wheel_rotation * PI / 180.0);

    let half = POCKET_DEGREES / 2.0;
    for (index, &number) in EUROPEAN_WHEEL.iter().enumerate() {
        let mid = index as f64 * POCKET_DEGREES;
        let start = to_canvas_radians(mid - half);
        let end = to_canvas_radians(mid + half);

        context.begin_path();
        context.set_fill_style_str(pocket_fill(pocket_color(number)));
        let _ = context.arc(0.0, 0.0, LABEL_RADIUS + 12.0, start, end);
        let _ = context.arc_with_anticlockwise(0.0, 0.0, POCKET_INNER_RADIUS, end, start, true);
        context.close_path();
        context.fill();

        context.set_stroke_style_str("#d4af37");
        context.set_line_width(1.5);
        context.stroke();

        context.save();
        let _ = context.rotate(mid * PI / 180.0);
        context.set_fill_style_str("#ffffff");
        context.set_font("bold 13px 'Segoe UI', Roboto, system-ui, sans-serif");
        context.set_text_align("center");
        context.set_text_baseline("middle");
        let _ = context.fill_text(&number.to_string(), 0.0, -LABEL_RADIUS);
        context.restore();
    }

    // Pocket floor ring
    context.begin_path();
    context.set_stroke_style_str("rgba(212, 175, 55, 0.8)");
    context.set_line_width(2.0);
    let _ = context.arc(0.0, 0.0, POCKET_OUTER_RADIUS, 0.0, 2.0 * PI);
    context.stroke();

    if let Some(angle) = highlight.and_then(pocket_angle) {
        context.begin_path();
        context.set_stroke_style_str("#facc15");
        context.set_line_width(5.0);
        let _ = context.arc(
            0.0,
            0.0,
            POCKET_OUTER_RADIUS,
            to_canvas_radians(angle - half),
            to_canvas_radians(angle + half),
        );
        context.stroke();
    }

    // Hub with spokes
    context.begin_path();
    context.set_fill_style_str("#78350f");
    let _ = context.arc(0.0, 0.0, POCKET_INNER_RADIUS, 0.0, 2.0 * PI);
    context.fill();

    context.set_stroke_style_str("#d4af37");
    context.set_line_width(4.0);
    for spoke in 0..4 {
        let theta = spoke as f64 * PI / 2.0;
        context.begin_path();
        context.move_to(0.0, 0.0);
        context.line_to(POCKET_INNER_RADIUS * 0.7 * theta.cos(), POCKET_INNER_RADIUS * 0.7 * theta.sin());
        context.stroke();
    }

    context.begin_path();
    context.set_fill_style_str("#d4af37");
    let _ = context.arc(0.0, 0.0, 18.0, 0.0, 2.0 * PI);
    context.fill();

    context.restore();

    // Ball, in table coordinates
    let theta = to_canvas_radians(state.ball_angle);
    let radius = state.ball_radius.min(OUTER_RADIUS);
    let x = center + radius * theta.cos();
    let y = center + radius * theta.sin();

    context.set_shadow_color("rgba(0, 0, 0, 0.5)");
    context.set_shadow_blur(6.0);
    context.begin_path();
    context.set_fill_style_str("#f9fafb");
    let _ = context.arc(x, y, BALL_SIZE, 0.0, 2.0 * PI);
    context.fill();
    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_o_clock_is_up() {
        assert!((to_canvas_radians(0.0) + PI / 2.0).abs() < 1e-12);
        assert!(to_canvas_radians(90.0).abs() < 1e-12);
    }
}
