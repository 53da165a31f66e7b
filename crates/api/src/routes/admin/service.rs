use crate::routes::admin::interfaces::AdminStats;
use common_albums::Manifest;

pub fn stats(manifest: &Manifest) -> AdminStats {
    AdminStats {
        client_count: manifest.len(),
        image_count: manifest.iter().map(|c| c.image_count).sum(),
        protected_count: manifest.iter().filter(|c| c.is_gated()).count(),
        generated_at: manifest.generated_at(),
    }
}

#[cfg(test)]
mod tests {
    use super::stats;
    use chrono::Utc;
    use common_albums::{ClientRecord, Manifest};

    fn record(folder: &str, password: &str, image_count: usize) -> ClientRecord {
        ClientRecord {
            id: folder.to_string(),
            folder: folder.to_string(),
            name: folder.to_string(),
            password: password.to_string(),
            files: Vec::new(),
            image_count,
        }
    }

    #[test]
    fn aggregates_counts() {
        let manifest = Manifest::from_records(
            Utc::now(),
            vec![
                record("a", "", 3),
                record("b", "segredo", 2),
                record("c", "outro", 0),
            ],
        )
        .unwrap();

        let stats = stats(&manifest);
        assert_eq!(stats.client_count, 3);
        assert_eq!(stats.image_count, 5);
        assert_eq!(stats.protected_count, 2);
    }
}
