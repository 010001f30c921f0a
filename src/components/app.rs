use super::{
    game_map::GameMap, hud::Hud, keyboard_controls::KeyboardControls,
    mobile_controls::MobileControls, player::PlayerMarker,
};
use crate::config::GameConfig;
use crate::model::{Action, Direction, GameAction, GameState};
use crate::state::{MovementLoop, RafScheduler};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = *use_state(GameConfig::load);
    let game = use_reducer(GameState::new);
    let movement = use_mut_ref(|| MovementLoop::new(&config, RafScheduler::new()));
    // Mirrors `map_open` for input callbacks created before the latest render.
    let map_open = use_mut_ref(|| false);

    // Movement frames: each one dispatches a step against the latest state.
    {
        let movement = movement.clone();
        let game = game.clone();
        use_effect_with((), move |_| {
            let scheduler = movement.borrow().scheduler().clone();
            {
                let movement = movement.clone();
                scheduler.install(move || {
                    let step = movement.borrow_mut().on_frame();
                    if let Some(step) = step {
                        game.dispatch(GameAction::Move {
                            direction: step.direction,
                            speed: step.speed,
                        });
                    }
                });
            }
            move || {
                movement.borrow_mut().halt();
                scheduler.uninstall();
            }
        });
    }
    // Opening the map freezes the player.
    {
        let movement = movement.clone();
        let map_open = map_open.clone();
        use_effect_with(game.map_open, move |open| {
            *map_open.borrow_mut() = *open;
            if *open {
                movement.borrow_mut().halt();
            }
            || ()
        });
    }

    let on_joystick_move = {
        let movement = movement.clone();
        let map_open = map_open.clone();
        Callback::from(move |direction: Direction| {
            if *map_open.borrow() {
                return;
            }
            movement.borrow_mut().set_touch(direction);
        })
    };
    let on_joystick_stop = {
        let movement = movement.clone();
        Callback::from(move |()| movement.borrow_mut().stop_touch())
    };
    let on_key_movement = {
        let movement = movement.clone();
        Callback::from(move |direction: Direction| movement.borrow_mut().set_keyboard(direction))
    };
    let on_action = {
        let game = game.clone();
        Callback::from(move |action: Action| game.dispatch(GameAction::Perform(action)))
    };
    let on_close_map = {
        let game = game.clone();
        Callback::from(move |()| game.dispatch(GameAction::CloseMap))
    };
    let on_select_weapon = {
        let game = game.clone();
        Callback::from(move |weapon: String| game.dispatch(GameAction::SelectWeapon(weapon)))
    };
    let on_restart = {
        let game = game.clone();
        let movement = movement.clone();
        Callback::from(move |()| {
            movement.borrow_mut().restart();
            game.dispatch(GameAction::Reset);
        })
    };

    let gs = (*game).clone();
    let world_style = format!(
        "position:absolute; inset:-1000px; background-color:#1b222c; background-image:linear-gradient(#263040 3px, transparent 3px), linear-gradient(90deg, #263040 3px, transparent 3px); background-size:96px 96px; transform:translate({}px, {}px); will-change:transform;",
        -gs.position.x * config.world_scroll,
        -gs.position.y * config.world_scroll
    );

    html! {
        <div style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0e1116; color:#c9d1d9; font-family:sans-serif; user-select:none;">
            <div style={world_style}></div>
            <PlayerMarker in_vehicle={gs.in_vehicle} health={gs.health} />
            <Hud
                health={gs.health}
                money={gs.money}
                wanted_level={gs.wanted_level}
                current_weapon={gs.current_weapon.clone()}
                weapons={gs.weapons.clone()}
                {on_select_weapon}
                {on_restart}
            />
            <MobileControls
                joystick_inset={config.joystick_inset}
                {on_joystick_move}
                {on_joystick_stop}
                on_action={on_action.clone()}
            />
            <KeyboardControls is_active={!gs.map_open} on_movement={on_key_movement} {on_action} />
            {
                if gs.map_open {
                    html! { <GameMap position={gs.position} on_close={on_close_map} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
