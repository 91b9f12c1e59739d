use crate::load::missing_error;
use crate::model::{DeriveCommand, IntermediateAttributes};

impl TryFrom<&syn::Attribute> for DeriveCommand {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let mut attributes = IntermediateAttributes::try_from(value)?;
        attributes.restrict(value, &[], &["key", "run", "help", "usage"])?;

        let key = attributes
            .pairs
            .remove("key")
            .ok_or_else(|| missing_error(value, "key"))?;
        let run = attributes
            .pairs
            .remove("run")
            .ok_or_else(|| missing_error(value, "run"))?;

        Ok(DeriveCommand {
            key,
            run,
            help: attributes.pairs.remove("help"),
            usage: attributes.pairs.remove("usage"),
        })
    }
}
