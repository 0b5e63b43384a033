//! Bin card list component.

use smartbin_types::Bin;
use yew::prelude::*;

/// Properties for BinList component.
#[derive(Properties, PartialEq)]
pub struct BinListProps {
    pub bins: Vec<Bin>,
}

/// Bin card list component: one card per bin, in input order, keyed by
/// the bin id.
#[function_component(BinList)]
pub fn bin_list(props: &BinListProps) -> Html {
    html! {
        <div class="bin-list">
            <h2 class="bin-list-title">{"Liste des Poubelles"}</h2>
            <div class="bin-list-container">
                { for props.bins.iter().map(|bin| {
                    html! {
                        <div key={bin.id.to_string()} class="bin-card">
                            <div class="bin-header">
                                <h3>{ format!("Poubelle #{}", bin.id) }</h3>
                                <span
                                    class="bin-status"
                                    style={format!("background-color: {}", bin.status.tone().color())}
                                >
                                    { bin.status.to_string() }
                                </span>
                            </div>
                            <div class="bin-details">
                                <p>
                                    <strong>{"Localisation: "}</strong>
                                    { &bin.location }
                                </p>
                                <p>
                                    <strong>{"Niveau de remplissage: "}</strong>
                                    { format!("{}%", bin.fill_level) }
                                </p>
                                <p>
                                    <strong>{"Dernière mise à jour: "}</strong>
                                    { &bin.last_updated }
                                </p>
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
