use std::path::PathBuf;

/// Container format, sniffed from the first bytes of the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelFormat {
    /// Binary glTF (`glTF` magic).
    Glb,
    /// JSON glTF.
    Gltf,
    Unknown,
}

impl ModelFormat {
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(b"glTF") {
            return Self::Glb;
        }
        match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'{') => Self::Gltf,
            _ => Self::Unknown,
        }
    }
}

/// Raw model file contents. Scene parsing is left to the renderer.
#[derive(Clone, Debug)]
pub struct ModelAsset {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub format: ModelFormat,
}

impl ModelAsset {
    pub fn new(path: PathBuf, bytes: Vec<u8>) -> Self {
        let format = ModelFormat::sniff(&bytes);
        Self {
            path,
            bytes,
            format,
        }
    }
}
