#[cfg(not(target_arch = "wasm32"))]
mod backend;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod contact;
#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod parallax;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod site;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    backend::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
