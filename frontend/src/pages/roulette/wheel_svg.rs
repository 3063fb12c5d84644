use shared::constants::{STROKE_COLOR, STROKE_WIDTH, TEXT_COLOR};
use shared::wheel_geometry::{WheelBody, WheelRender};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WheelSvgProps {
    pub render: WheelRender,
}

#[function_component(WheelSvg)]
pub fn wheel_svg(props: &WheelSvgProps) -> Html {
    let render = &props.render;
    let center = render.center();

    let body = match &render.body {
        WheelBody::Placeholder { fill } => html! {
            <circle
                cx={center.to_string()}
                cy={center.to_string()}
                r={render.radius.to_string()}
                fill={*fill}
                stroke={STROKE_COLOR}
                stroke-width={STROKE_WIDTH.to_string()}
            />
        },
        WheelBody::Slices(slices) => slices
            .iter()
            .map(|slice| {
                let label_transform = format!(
                    "rotate({}, {}, {})",
                    slice.label_rotation, slice.label_x, slice.label_y
                );
                html! {
                    <g key={slice.index}>
                        <path
                            d={slice.path.clone()}
                            fill={slice.color}
                            stroke={STROKE_COLOR}
                            stroke-width={STROKE_WIDTH.to_string()}
                        />
                        <text
                            x={slice.label_x.to_string()}
                            y={slice.label_y.to_string()}
                            transform={label_transform}
                            fill={TEXT_COLOR}
                            font-size={slice.font_size.to_string()}
                            font-weight="bold"
                            text-anchor="middle"
                            dominant-baseline="middle"
                            class="pointer-events-none select-none"
                        >
                            {slice.display_label.clone()}
                        </text>
                    </g>
                }
            })
            .collect::<Html>(),
    };

    html! {
        <svg
            viewBox={render.view_box()}
            class={styles::WHEEL_SVG}
            style="transform-origin: center center;"
        >
            <g style={render.group_style()}>
                {body}
            </g>
            { for render.hub.iter().map(|hub| {
                let (stroke, stroke_width) = hub.stroke.unwrap_or(("none", 0.0));
                html! {
                    <circle
                        cx={center.to_string()}
                        cy={center.to_string()}
                        r={hub.radius.to_string()}
                        fill={hub.fill}
                        stroke={stroke}
                        stroke-width={stroke_width.to_string()}
                    />
                }
            }) }
        </svg>
    }
}
