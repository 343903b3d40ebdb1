pub mod styles;
pub mod pages;
pub mod config;
pub mod storage;
pub mod frame_clock;

use yew::prelude::*;
use crate::pages::frontend_wheel_game::WheelGamePage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen w-full">
            <div class="mx-auto">
                <WheelGamePage />
            </div>
        </div>
    }
}
