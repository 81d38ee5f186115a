//! Training-centre detail page, looked up by slug.

use dioxus::prelude::*;

use common::gym::GymRecord;

use crate::api::gyms_api::get_gym_by_slug;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::not_found::NotFoundView;
use crate::components::suspend_boundary::SuspendWrapper;

const CENTER_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/800x600?text=Centre";

#[component]
pub fn CenterDetailPage(slug: String) -> Element {
    rsx! {
        SuspendWrapper { CenterDetailLoader { slug } }
    }
}

#[component]
fn CenterDetailLoader(slug: ReadSignal<String>) -> Element {
    let gym = use_resource(move || {
        let slug = slug.read().clone();
        get_gym_by_slug(slug)
    })
    .suspend()?
    .cloned();

    match gym {
        Err(e) => rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(None) => rsx! {
            Title { "Centre Not Found | Hyrox Directory" }
            NotFoundView { message: "Centre not found".to_string() }
        },
        Ok(Some(gym)) => rsx! { CenterDetailView { gym } },
    }
}

#[component]
fn CenterDetailView(gym: ReadSignal<GymRecord>) -> Element {
    let gym = gym.read().clone();
    let image = gym
        .main_image_url
        .clone()
        .unwrap_or_else(|| CENTER_PLACEHOLDER_IMAGE.to_string());
    let email = gym.email.clone().unwrap_or_else(|| "Not listed".to_string());
    let phone = gym.phone.clone().unwrap_or_else(|| "Not listed".to_string());

    rsx! {
        Title { "{gym.display_name()} | Hyrox Training Centre" }
        div {
            id: "x-center-detail",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 32px;
                padding: 40px;
                max-width: 1100px;
                margin: 0 auto;
                box-sizing: border-box;
            ",

            div {
                style: "flex: 1; min-width: 320px;",
                h1 {
                    style: "font-size: 36px; font-weight: 700; color: #0F172A; margin: 0 0 16px 0;",
                    "{gym.display_name()}"
                }
                if let Some(description) = gym.description.as_deref() {
                    p {
                        style: "font-size: 16px; color: #374151; line-height: 1.6;",
                        "{description}"
                    }
                }
                if let Some(services) = gym.services.clone() {
                    ul {
                        style: "padding-left: 24px; color: #374151;",
                        for service in services {
                            li { key: "{service}", "{service}" }
                        }
                    }
                }

                p {
                    style: "font-size: 15px; color: #111827;",
                    strong { "Email: " }
                    "{email}"
                }
                p {
                    style: "font-size: 15px; color: #111827;",
                    strong { "Phone: " }
                    "{phone}"
                }

                if let Some(url) = gym.url.as_deref() {
                    a {
                        href: "{url}",
                        target: "_blank",
                        style: "color: #2563EB; font-size: 15px;",
                        "Visit Official Website"
                    }
                }
            }

            div {
                style: "flex: 1; min-width: 320px;",
                img {
                    src: "{image}",
                    alt: "{gym.display_name()}",
                    style: "width: 100%; border-radius: 8px; box-shadow: 0 2px 8px 0 rgba(0,0,0,0.12);",
                }
            }
        }
    }
}
