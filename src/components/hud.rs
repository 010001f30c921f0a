use crate::model::{MAX_HEALTH, MAX_WANTED_LEVEL};
use crate::util::format_money;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HudProps {
    pub health: u32,
    pub money: u64,
    pub wanted_level: u8,
    pub current_weapon: String,
    pub weapons: Vec<String>,
    pub on_select_weapon: Callback<String>,
    pub on_restart: Callback<()>,
}

#[function_component]
pub fn Hud(props: &HudProps) -> Html {
    let panel_style = "display:flex; align-items:center; gap:8px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:6px 12px;";
    let health_pct = props.health.min(MAX_HEALTH);
    let stars = (1..=MAX_WANTED_LEVEL).map(|star| {
        let color = if star <= props.wanted_level { "#d29922" } else { "#484f58" };
        html! { <span key={star.to_string()} style={format!("color:{}; font-size:16px;", color)}>{"★"}</span> }
    });
    let slots = props.weapons.iter().map(|weapon| {
        let selected = *weapon == props.current_weapon;
        let style = if selected {
            "padding:6px 12px; border-radius:6px; border:1px solid #58a6ff; background:#1f6feb; color:#fff; font-weight:600; cursor:pointer;"
        } else {
            "padding:6px 12px; border-radius:6px; border:1px solid #30363d; background:#21262d; color:#c9d1d9; cursor:pointer;"
        };
        let onclick = {
            let cb = props.on_select_weapon.clone();
            let weapon = weapon.clone();
            Callback::from(move |_| cb.emit(weapon.clone()))
        };
        html! { <button key={weapon.clone()} {style} {onclick}>{ weapon.clone() }</button> }
    });
    let restart_cb = {
        let cb = props.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <>
            <div style="position:absolute; top:12px; left:12px; right:12px; display:flex; justify-content:space-between; align-items:flex-start; z-index:50;">
                <div style="display:flex; flex-direction:column; gap:8px;">
                    <div style={panel_style}>
                        <span style="color:#f85149;">{"❤"}</span>
                        <div style="width:96px; height:8px; background:#21262d; border-radius:4px; overflow:hidden;">
                            <div style={format!("width:{}%; height:100%; background:#2ea043;", health_pct)}></div>
                        </div>
                        <span style="font-variant-numeric:tabular-nums; font-weight:600;">{ props.health }</span>
                    </div>
                    <div style={panel_style}>
                        <span style="color:#2ea043; font-weight:600; font-variant-numeric:tabular-nums;">{ format_money(props.money) }</span>
                    </div>
                </div>
                <div style="display:flex; flex-direction:column; align-items:flex-end; gap:8px;">
                    <div style={panel_style}>{ for stars }</div>
                    <button onclick={restart_cb} style="padding:4px 10px; font-size:12px;">{"Restart"}</button>
                </div>
            </div>
            <div style="position:absolute; bottom:96px; left:50%; transform:translateX(-50%); z-index:50;">
                <div style={format!("{} gap:6px; padding:8px 12px;", panel_style)}>{ for slots }</div>
            </div>
        </>
    }
}
