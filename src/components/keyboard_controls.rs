use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::model::{Action, Direction};
use crate::state::KeyboardInput;
use crate::state::keyboard::captures_default;

#[derive(Properties, PartialEq, Clone)]
pub struct KeyboardControlsProps {
    /// Listeners are attached only while true.
    pub is_active: bool,
    pub on_movement: Callback<Direction>,
    pub on_action: Callback<Action>,
}

/// Window-level key listeners for desktop play. Renders nothing.
#[function_component]
pub fn KeyboardControls(props: &KeyboardControlsProps) -> Html {
    let input = use_mut_ref(KeyboardInput::new);

    {
        let input = input.clone();
        let on_movement = props.on_movement.clone();
        let on_action = props.on_action.clone();
        use_effect_with(props.is_active, move |active| {
            let active = *active;
            input.borrow_mut().set_active(active);
            let window = web_sys::window();

            let keydown_cb = {
                let input = input.clone();
                let on_movement = on_movement.clone();
                let on_action = on_action.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    let code = e.code();
                    if captures_default(&code) {
                        e.prevent_default();
                    }
                    let outcome = input.borrow_mut().key_down(&code, e.repeat());
                    if let Some(action) = outcome.action {
                        on_action.emit(action);
                    }
                    if let Some(direction) = outcome.movement {
                        on_movement.emit(direction);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let keyup_cb = {
                let input = input.clone();
                let on_movement = on_movement.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    let outcome = input.borrow_mut().key_up(&e.code());
                    if let Some(direction) = outcome.movement {
                        on_movement.emit(direction);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            // Keys released while the page is unfocused never send keyup.
            let blur_cb = {
                let input = input.clone();
                let on_movement = on_movement.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    input.borrow_mut().clear();
                    on_movement.emit(Direction::ZERO);
                }) as Box<dyn FnMut(_)>)
            };

            if active {
                if let Some(win) = &window {
                    let _ = win.add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref());
                    let _ = win.add_event_listener_with_callback("keyup", keyup_cb.as_ref().unchecked_ref());
                    let _ = win.add_event_listener_with_callback("blur", blur_cb.as_ref().unchecked_ref());
                }
            }

            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref());
                    let _ = win.remove_event_listener_with_callback("keyup", keyup_cb.as_ref().unchecked_ref());
                    let _ = win.remove_event_listener_with_callback("blur", blur_cb.as_ref().unchecked_ref());
                }
                input.borrow_mut().clear();
                drop(keydown_cb);
                drop(keyup_cb);
                drop(blur_cb);
            }
        });
    }

    html! {}
}
