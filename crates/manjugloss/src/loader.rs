use tracing::{info, warn};

use manju_dict::{DictionarySlot, FileSource, LoadError, load};

/// Load every configured dictionary concurrently.
///
/// Returns one slot per configured `(label, path)` pair, in config order: a
/// failed or panicked load becomes an absent slot rather than dropping the
/// label, so the service always reports every configured dictionary.
pub async fn load_dictionaries(sources: Vec<(String, String)>) -> Vec<DictionarySlot> {
    let tasks: Vec<_> = sources
        .into_iter()
        .map(|(label, path)| {
            let handle = tokio::spawn(async move {
                let source = FileSource::new(&path);
                load(&source).await
            });
            (label, handle)
        })
        .collect();

    let mut slots = Vec::with_capacity(tasks.len());
    for (label, handle) in tasks {
        let slot = match handle.await {
            Ok(Ok(dict)) => {
                info!("dictionary {label} ready with {} entries", dict.len());
                DictionarySlot::ready(label, dict)
            }
            Ok(Err(err)) => {
                warn!("dictionary {label} unavailable: {err}");
                DictionarySlot::absent(label, err)
            }
            Err(err) => {
                warn!("dictionary {label} load task failed: {err}");
                DictionarySlot::absent(
                    label,
                    LoadError::Unreachable(format!("load task failed: {err}")),
                )
            }
        };
        slots.push(slot);
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_configured_label_gets_a_slot_in_config_order() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        std::fs::write(&good, r#"[{"Words": "morin", "Definition": "horse"}]"#).unwrap();
        let missing = dir.path().join("missing.json");

        let slots = load_dictionaries(vec![
            ("english".into(), good.display().to_string()),
            ("chinese".into(), missing.display().to_string()),
            ("sibe".into(), good.display().to_string()),
        ])
        .await;

        let labels: Vec<&str> = slots.iter().map(|slot| slot.label()).collect();
        assert_eq!(labels, vec!["english", "chinese", "sibe"]);
        assert!(slots[0].dictionary().is_some());
        assert!(matches!(
            slots[1].error(),
            Some(LoadError::Unreachable(_))
        ));
        assert!(slots[2].dictionary().is_some());
    }
}
