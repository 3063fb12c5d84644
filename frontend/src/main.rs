use frontend::App;
use yew::Renderer;

fn main() {
    // Route the log facade to the browser console
    wasm_logger::init(wasm_logger::Config::default());

    Renderer::<App>::new().render();
}
