use import_core::{build_pending_sources, Effect, Msg, PendingSource, WizardStep};
use import_engine::{
    write_sources_manifest, EngineConfig, ExtensionIconResolver, NanoIdGenerator,
};
use import_logging::{import_error, import_info};

/// Executes effects with the real collaborators and returns follow-up messages.
pub struct EffectRunner {
    config: EngineConfig,
    ids: NanoIdGenerator,
    icons: ExtensionIconResolver,
}

impl EffectRunner {
    pub fn new(config: EngineConfig) -> Self {
        let ids = NanoIdGenerator::with_length(config.id_length);
        let icons = ExtensionIconResolver::with_fallback(config.default_icon.clone());
        Self { config, ids, icons }
    }

    /// `sources` is the host's committed list at the time the effects were produced.
    pub fn run(&self, effects: Vec<Effect>, sources: &[PendingSource]) -> Vec<Msg> {
        let mut follow_up = Vec::new();
        for effect in effects {
            match effect {
                Effect::CommitSources { revision, rows } => {
                    let built = build_pending_sources(&rows, &self.ids, &self.icons);
                    import_info!(
                        "CommitSources revision={} rows={} built={}",
                        revision,
                        rows.len(),
                        built.len()
                    );
                    follow_up.push(Msg::SourcesCommitted {
                        revision,
                        sources: built,
                    });
                }
                Effect::StepChanged { step } => {
                    import_info!("StepChanged step={}", step.index());
                    if step == WizardStep::Upload {
                        self.hand_off(sources);
                    }
                }
            }
        }
        follow_up
    }

    fn hand_off(&self, sources: &[PendingSource]) {
        let Some(dir) = &self.config.output_dir else {
            return;
        };
        if let Err(err) = write_sources_manifest(dir, sources) {
            import_error!("Failed to hand sources to upload step in {:?}: {}", dir, err);
        }
    }
}
