use web_sys::{HtmlElement, TouchEvent};
use yew::prelude::*;

use crate::model::{Action, Direction};
use crate::state::{JoystickReading, JoystickRegion, JoystickState};

const PAD_SIZE_PX: f64 = 80.0;
const BUTTONS: [(Action, &str); 4] = [
    (Action::Jump, "#f0883e"),
    (Action::Sprint, "#58a6ff"),
    (Action::Interact, "#2ea043"),
    (Action::ToggleMap, "#d29922"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct MobileControlsProps {
    pub joystick_inset: f64,
    pub on_joystick_move: Callback<Direction>,
    pub on_joystick_stop: Callback<()>,
    pub on_action: Callback<Action>,
}

fn read_first_touch(pad_ref: &NodeRef, e: &TouchEvent, inset: f64) -> Option<JoystickReading> {
    let touch = e.target_touches().item(0)?;
    let pad = pad_ref.cast::<HtmlElement>()?;
    let rect = pad.get_bounding_client_rect();
    let region = JoystickRegion::from_rect(rect.left(), rect.top(), rect.width(), rect.height(), inset);
    Some(region.read(touch.client_x() as f64, touch.client_y() as f64))
}

#[function_component]
pub fn MobileControls(props: &MobileControlsProps) -> Html {
    let pad_ref = use_node_ref();
    let joystick = use_mut_ref(JoystickState::default);
    let knob = use_state(|| (0.0_f64, 0.0_f64));

    // Start and move share the same path: a held touch steers from its first frame.
    let steer = {
        let pad_ref = pad_ref.clone();
        let joystick = joystick.clone();
        let knob = knob.clone();
        let on_move = props.on_joystick_move.clone();
        let inset = props.joystick_inset;
        move |e: &TouchEvent| {
            let Some(reading) = read_first_touch(&pad_ref, e, inset) else {
                return;
            };
            let emitted = joystick.borrow_mut().update(reading);
            if let Some(direction) = emitted {
                knob.set((reading.knob_x, reading.knob_y));
                on_move.emit(direction);
            }
        }
    };
    let touch_start = {
        let joystick = joystick.clone();
        let steer = steer.clone();
        Callback::from(move |e: TouchEvent| {
            joystick.borrow_mut().begin();
            steer(&e);
        })
    };
    let touch_move = Callback::from(move |e: TouchEvent| steer(&e));
    let touch_end = {
        let joystick = joystick.clone();
        let knob = knob.clone();
        let on_stop = props.on_joystick_stop.clone();
        Callback::from(move |_: TouchEvent| {
            let was_dragging = joystick.borrow_mut().release();
            knob.set((0.0, 0.0));
            if was_dragging {
                on_stop.emit(());
            }
        })
    };

    let (kx, ky) = *knob;
    let buttons = BUTTONS.iter().map(|&(action, color)| {
        let onpointerdown = {
            let cb = props.on_action.clone();
            Callback::from(move |_: PointerEvent| cb.emit(action))
        };
        html! {
            <button key={action.label()} {onpointerdown} style={format!("width:56px; height:56px; border-radius:50%; background:rgba(22,27,34,0.9); border:2px solid #30363d; color:{}; font-size:11px; font-weight:600; touch-action:none;", color)}>
                { action.label() }
            </button>
        }
    });

    html! {
        <>
            <div style="position:absolute; left:16px; bottom:16px; z-index:50; text-align:center;">
                <div ref={pad_ref}
                    ontouchstart={touch_start}
                    ontouchmove={touch_move}
                    ontouchend={touch_end.clone()}
                    ontouchcancel={touch_end}
                    style={format!("position:relative; width:{0}px; height:{0}px; border-radius:50%; background:rgba(22,27,34,0.9); border:2px solid #30363d; touch-action:none;", PAD_SIZE_PX)}>
                    <div style={format!("position:absolute; left:50%; top:50%; width:32px; height:32px; border-radius:50%; background:#58a6ff; box-shadow:0 0 10px #58a6ff; transform:translate(-50%, -50%) translate({}px, {}px);", kx, ky)}></div>
                </div>
                <div style="font-size:11px; opacity:0.7; margin-top:4px;">{"Move"}</div>
            </div>
            <div style="position:absolute; right:16px; bottom:16px; z-index:50; display:grid; grid-template-columns:repeat(2, 56px); gap:12px;">
                { for buttons }
            </div>
        </>
    }
}
