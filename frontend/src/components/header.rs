//! Header component
//!
//! Desktop bar with the brand, an about label and the repository link.
//! Below the `sm` breakpoint the links collapse behind a menu button that
//! opens a slide-down overlay.

use leptos::prelude::*;
use leptos_router::components::A;
use shared::{Asset, MenuEntry, MenuState, NavLink, OverlayMenu, ABOUT_LABEL};

#[component]
pub fn Header() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    let open_menu = move |_| {
        menu.update(MenuState::open);
        log::debug!("mobile menu opened");
    };

    view! {
        <div class="w-full h-24 border-y border-white/10 flex flex-col justify-center sm:h-fit sm:border-y-0 sm:flex-row">
            <div class="w-full max-w-4xl flex flex-row items-center justify-between border border-white/10 px-3.5 rounded-3xl sm:rounded-none sm:border-0">
                <Brand home=NavLink::home() />
                <button class="block sm:hidden py-2.5" on:click=open_menu>
                    {image(Asset::Menu)}
                </button>
                <nav class="sm:flex flex-row items-center space-x-5 hidden">
                    <h6 class="uppercase text-white">{ABOUT_LABEL}</h6>
                    <ExternalLink link=NavLink::repository() />
                </nav>
            </div>
            {move || menu.get().overlay().map(|overlay| view! { <Overlay overlay=overlay menu=menu /> })}
        </div>
    }
}

/// logo and title, linking back to the site root
#[component]
fn Brand(home: NavLink) -> impl IntoView {
    view! {
        <A href=home.href>
            <div class="flex flex-row items-center justify-center space-x-0.5">
                {image(Asset::Logo)}
                <h6 class="uppercase text-white">{home.label}</h6>
            </div>
        </A>
    }
}

#[component]
fn ExternalLink(link: NavLink) -> impl IntoView {
    view! {
        <a href=link.href target=link.target.attr() rel=link.target.rel()>
            <div class="flex flex-row items-center space-x-1">
                {image(Asset::Github)}
                <h6 class="text-[#00FF5E] uppercase">{link.label}</h6>
            </div>
        </a>
    }
}

#[component]
fn Overlay(overlay: OverlayMenu, menu: RwSignal<MenuState>) -> impl IntoView {
    let close_menu = move |_| {
        menu.update(MenuState::close);
        log::debug!("mobile menu closed");
    };

    let entries = overlay
        .entries
        .into_iter()
        .map(|entry| match entry {
            MenuEntry::Label(label) => view! {
                <button class="text-white w-full text-center bg-[#111111] py-2.5 rounded-md uppercase">
                    {label}
                </button>
            }
            .into_any(),
            MenuEntry::Link(link) => view! {
                <div class="w-full flex flex-row items-center justify-center bg-[#111111] py-2.5 rounded-md">
                    <ExternalLink link=link />
                </div>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <div class="w-full h-fit absolute top-16 z-20 inset-x-0 flex flex-row items-center rounded-xl sm:hidden">
            <div class="w-full mx-5 h-full backdrop-blur-md rounded-xl border-2 border-white/10">
                <div class="w-full max-w-4xl flex flex-row items-center justify-between border-b border-white/10 px-3.5 sm:border-0">
                    <Brand home=overlay.home />
                    <button class="block sm:hidden py-2.5" on:click=close_menu>
                        {image(overlay.close_icon)}
                    </button>
                </div>
                <div class="py-2.5 px-2.5 space-y-2.5">{entries}</div>
            </div>
        </div>
    }
}

fn image(asset: Asset) -> impl IntoView {
    let (width, height) = asset
        .dimensions()
        .map(|(w, h)| (Some(w.to_string()), Some(h.to_string())))
        .unwrap_or_default();

    view! { <img src=asset.path() alt=asset.alt() width=width height=height /> }
}
