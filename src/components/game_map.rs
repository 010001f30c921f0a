use super::legend::LegendRow;
use crate::model::{LOCATIONS, LocationKind, Position};
use yew::prelude::*;

const LEGEND: [LocationKind; 5] = [
    LocationKind::GunStore,
    LocationKind::Dealership,
    LocationKind::Garage,
    LocationKind::Mechanic,
    LocationKind::Apartment,
];

#[derive(Properties, PartialEq, Clone)]
pub struct GameMapProps {
    pub position: Position,
    pub on_close: Callback<()>,
}

/// Full-screen city map. Reads the player position; its only output is close.
#[function_component]
pub fn GameMap(props: &GameMapProps) -> Html {
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let markers = LOCATIONS.iter().enumerate().map(|(i, loc)| {
        html! {
            <div key={i.to_string()} title={loc.label} style={format!("position:absolute; left:{}%; top:{}%; transform:translate(-50%, -50%); width:28px; height:28px; border-radius:50%; background:rgba(22,27,34,0.9); border:2px solid {}; z-index:10;", loc.x, loc.y, loc.kind.color())}></div>
        }
    });
    html! {
        <div style="position:fixed; inset:0; z-index:100; background:rgba(14,17,22,0.96); display:flex; flex-direction:column;">
            <div style="display:flex; justify-content:space-between; align-items:center; padding:12px 16px; border-bottom:1px solid #30363d;">
                <h2 style="margin:0; font-size:20px;">{"City Map"}</h2>
                <button onclick={close_cb} style="padding:4px 10px;">{"Close"}</button>
            </div>
            <div style="position:relative; flex:1; margin:16px; border:1px solid #30363d; border-radius:8px; overflow:hidden; background-color:#1b222c; background-image:linear-gradient(#263040 2px, transparent 2px), linear-gradient(90deg, #263040 2px, transparent 2px); background-size:48px 48px;">
                { for markers }
                <div style={format!("position:absolute; left:{}%; top:{}%; transform:translate(-50%, -50%); width:20px; height:20px; border-radius:50%; background:#58a6ff; border:3px solid #fff; box-shadow:0 0 10px #58a6ff; z-index:20;", props.position.x, props.position.y)}></div>
                <div style="position:absolute; left:12px; bottom:12px; background:#161b22; border:1px solid #30363d; border-radius:8px; padding:8px 12px; font-size:12px;">
                    <div style="font-weight:600; margin-bottom:4px;">{"Legend"}</div>
                    { for LEGEND.iter().map(|&kind| html!{ <LegendRow {kind} /> }) }
                </div>
            </div>
        </div>
    }
}
