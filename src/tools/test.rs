#[cfg(test)]
pub mod tests {
    use std::fs;
    use std::path::PathBuf;
    use uuid::Uuid;

    /// A fresh directory under the system's temp dir, unique to the caller.
    pub fn temp_dir() -> PathBuf {
        let buf = std::env::temp_dir().join(format!("club-registry-{}", Uuid::new_v4()));
        fs::create_dir(&buf).unwrap();

        buf
    }
}
