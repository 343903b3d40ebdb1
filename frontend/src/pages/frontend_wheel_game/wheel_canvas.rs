use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use wheel_shared::i18n::Language;
use wheel_shared::SegmentLayout;
use yew::prelude::*;

const CANVAS_SIZE: u32 = 520;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    /// Wheel rotation in radians, clockwise on screen.
    pub rotation: f64,
    pub is_spinning: bool,
    pub layout: SegmentLayout,
    pub language: Language,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();

        use_effect_with(
            (props.rotation, props.is_spinning, props.layout.clone(), props.language),
            move |(rotation, is_spinning, layout, language)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(e) = draw_wheel(&canvas, *rotation, *is_spinning, layout, *language) {
                        log::warn!("Failed to draw wheel: {:?}", e);
                    }
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-full max-w-[520px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

fn draw_wheel(
    canvas: &HtmlCanvasElement,
    rotation: f64,
    is_spinning: bool,
    layout: &SegmentLayout,
    language: Language,
) -> Result<(), JsValue> {
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let size = canvas.width() as f64;
    let center = size / 2.0;
    let radius = center - 10.0;
    let text_radius = radius * 0.72;
    let slice = layout.slice_width();

    context.clear_rect(0.0, 0.0, size, size);

    // Outer glow, brighter while spinning
    context.begin_path();
    let glow = if is_spinning { 0.25 } else { 0.15 };
    if is_dark_mode() {
        context.set_fill_style_str(&format!("rgba(130, 100, 255, {})", glow));
    } else {
        context.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow));
    }
    context.arc(center, center, radius + 8.0, 0.0, 2.0 * PI)?;
    context.fill();

    context.save();
    context.translate(center, center)?;
    context.rotate(rotation)?;

    let font_size = (radius * 0.08).clamp(12.0, 20.0);
    for segment in layout.segments() {
        let a0 = segment.index as f64 * slice;
        let a1 = a0 + slice;

        context.begin_path();
        context.move_to(0.0, 0.0);
        context.arc(0.0, 0.0, radius, a0, a1)?;
        context.close_path();
        context.set_fill_style_str(segment.color);
        context.fill();
        context.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
        context.set_line_width(2.0);
        context.stroke();

        let mid = a0 + slice / 2.0;
        context.save();
        context.translate(mid.cos() * text_radius, mid.sin() * text_radius)?;
        context.rotate(mid + PI / 2.0)?;
        context.set_fill_style_str("#101325");
        context.set_font(&format!("bold {}px ui-sans-serif, system-ui, -apple-system", font_size));
        context.set_text_align("center");
        context.set_text_baseline("middle");
        context.fill_text(segment.display_label(language), 0.0, 0.0)?;
        context.restore();
    }

    // Hub
    context.begin_path();
    context.arc(0.0, 0.0, (radius * 0.035).clamp(12.0, 18.0), 0.0, 2.0 * PI)?;
    context.set_fill_style_str("#ffffff");
    context.fill();
    context.restore();

    // Pointer stays fixed at 12 o'clock
    context.begin_path();
    context.move_to(center - 12.0, 2.0);
    context.line_to(center + 12.0, 2.0);
    context.line_to(center, 30.0);
    context.close_path();
    context.set_fill_style_str("#ffd700");
    context.fill();
    context.set_stroke_style_str("#101325");
    context.set_line_width(1.5);
    context.stroke();

    Ok(())
}
