use crate::loader::Loader;
use crate::selection::SelectionController;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub selection: Arc<Mutex<SelectionController>>,
    pub loader: Loader,
}

impl AppState {
    pub fn new(data_path: PathBuf, selection: SelectionController, loader: Loader) -> Self {
        Self {
            data_path,
            selection: Arc::new(Mutex::new(selection)),
            loader,
        }
    }
}
