use logistics_inventory_ui::{App, CONFIG};

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Logistics Inventory UI starting (API: {})", CONFIG.api_base_url);

    yew::Renderer::<App>::new().render();
}
