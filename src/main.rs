#[cfg(target_arch = "wasm32")]
pub fn main() {
    portfolio::mount();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
