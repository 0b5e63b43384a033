//! Bins list page component.

use smartbin_types::{fixtures, table::bins_table};
use yew::prelude::*;

use crate::components::{DataTable, Toolbar};

/// Bins page component.
#[function_component(BinsPage)]
pub fn bins_page() -> Html {
    let bins = use_state(fixtures::bins);

    html! {
        <div>
            <Toolbar title="Gestion des poubelles" add_label="Ajouter" />
            <DataTable model={bins_table(&bins)} />
        </div>
    }
}
