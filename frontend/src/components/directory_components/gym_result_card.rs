//! Gym result card component.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_communication_icons::MdLocationOn};

use common::gym::GymRecord;

use crate::routes::Route;

const GYM_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400?text=Gym";

#[component]
pub fn GymResultCard(gym: ReadSignal<GymRecord>) -> Element {
    let gym = gym.read().clone();
    let image = gym.thumb.clone().unwrap_or_else(|| GYM_PLACEHOLDER_IMAGE.to_string());
    let location_line = gym.location_line();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                background: white;
                border: 1px solid #AAAAAA33;
                border-radius: 12px;
                overflow: hidden;
                box-shadow: 0 2px 8px 0 rgba(0, 0, 0, 0.08);
                width: 100%;
                box-sizing: border-box;
            ",

            img {
                src: "{image}",
                alt: "{gym.display_name()}",
                style: "width: 100%; height: 180px; object-fit: cover; background: #E5E7EB;",
            }

            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                    padding: 14px 16px;
                    text-align: left;
                ",
                div {
                    style: "font-size: 18px; font-weight: 700; color: rgb(0,0,0);",
                    "{gym.display_name()}"
                }
                if let Some(address) = gym.address.as_deref() {
                    div {
                        style: "font-size: 14px; color: #374151;",
                        "{address}"
                    }
                }
                if !location_line.is_empty() {
                    div {
                        style: "display:flex; align-items:center; gap: 4px; font-size: 13px; color: #6B7280;",
                        Icon { icon: MdLocationOn, style: "width: 14px; height: 14px;" }
                        "{location_line}"
                    }
                }
                if let Some(slug) = gym.slug.clone() {
                    Link {
                        to: Route::CenterDetailPage { slug },
                        span {
                            style: "font-size: 14px; font-weight: 600; color: #DB2777;",
                            "View Centre"
                        }
                    }
                }
            }
        }
    }
}
