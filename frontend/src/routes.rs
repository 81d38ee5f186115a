use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::center_detail_page::CenterDetailPage;
use crate::pages::gyms_page::GymsPage;
use crate::pages::home_page::HomePage;
use crate::pages::plan_detail_page::PlanDetailPage;
use crate::pages::training_plans_page::TrainingPlansPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    HomePage {},

    #[route("/gyms")]
    GymsPage {},

    #[route("/plans")]
    TrainingPlansPage {},

    #[route("/centers/:slug")]
    CenterDetailPage { slug: String },

    #[route("/plans/:slug")]
    PlanDetailPage { slug: String },
}
