//! Per-row enrichment results and their flattened attribute view.

use inv_model::{FieldName, FieldOutcome, RawRecord, RowId};

/// IPv4 outcome plus the attributes derived from a valid address.
///
/// The address class lives in the outcome's `kind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpResult {
    pub outcome: FieldOutcome,
    /// `"4"` when valid, empty otherwise.
    pub version: String,
    pub reverse_ptr: String,
    pub subnet: String,
}

/// Owner outcome; the canonical value is the extracted owner name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerResult {
    pub outcome: FieldOutcome,
    pub email: String,
    pub team: String,
}

/// Device outcome; the canonical value is the inferred device type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceResult {
    pub outcome: FieldOutcome,
    pub type_confidence: String,
}

/// A raw record together with every field processor's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedRecord {
    pub raw: RawRecord,
    pub ip: IpResult,
    pub mac: FieldOutcome,
    pub site: FieldOutcome,
    pub hostname: FieldOutcome,
    pub fqdn: FieldOutcome,
    pub owner: OwnerResult,
    pub device: DeviceResult,
}

impl EnrichedRecord {
    pub fn row_id(&self) -> &RowId {
        self.raw.row_id()
    }

    pub fn outcome(&self, field: FieldName) -> &FieldOutcome {
        match field {
            FieldName::Ip => &self.ip.outcome,
            FieldName::Mac => &self.mac,
            FieldName::Site => &self.site,
            FieldName::Hostname => &self.hostname,
            FieldName::Fqdn => &self.fqdn,
            FieldName::Owner => &self.owner.outcome,
            FieldName::Device => &self.device.outcome,
        }
    }

    /// Outcomes in processing order.
    pub fn outcomes(&self) -> impl Iterator<Item = &FieldOutcome> + '_ {
        FieldName::ALL.iter().map(|field| self.outcome(*field))
    }

    pub fn has_issues(&self) -> bool {
        self.outcomes().any(|outcome| !outcome.is_valid())
    }

    /// Every field's step trace, in processing order, joined with `|`.
    pub fn normalization_steps(&self) -> String {
        self.outcomes()
            .map(|outcome| outcome.steps().joined())
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Flattens the results into `<field>_<attribute>` pairs.
    ///
    /// Per field: `_out`, `_valid` (validated fields only), field-specific
    /// attributes, then `_issues`, `_recommended_action` and
    /// `_normalization_steps`.
    pub fn attributes(&self) -> Vec<(String, String)> {
        let mut attrs = Vec::new();

        let ip = &self.ip.outcome;
        push_head(&mut attrs, ip, true);
        attrs.push((ip.field().attribute("version"), self.ip.version.clone()));
        attrs.push((ip.field().attribute("reverse_ptr"), self.ip.reverse_ptr.clone()));
        attrs.push((ip.field().attribute("classification"), ip.kind().to_string()));
        attrs.push(("subnet_cidr".to_string(), self.ip.subnet.clone()));
        push_tail(&mut attrs, ip);

        push_kinded(&mut attrs, &self.mac);

        push_head(&mut attrs, &self.site, false);
        push_tail(&mut attrs, &self.site);

        push_kinded(&mut attrs, &self.hostname);
        push_kinded(&mut attrs, &self.fqdn);

        let owner = &self.owner.outcome;
        push_head(&mut attrs, owner, false);
        attrs.push((owner.field().attribute("email"), self.owner.email.clone()));
        attrs.push((owner.field().attribute("team"), self.owner.team.clone()));
        push_tail(&mut attrs, owner);

        let device = &self.device.outcome;
        push_head(&mut attrs, device, false);
        attrs.push((
            device.field().attribute("type_confidence"),
            self.device.type_confidence.clone(),
        ));
        push_tail(&mut attrs, device);

        attrs
    }
}

fn push_head(attrs: &mut Vec<(String, String)>, outcome: &FieldOutcome, with_validity: bool) {
    let field = outcome.field();
    attrs.push((field.attribute("out"), outcome.canonical_value().to_string()));
    if with_validity {
        attrs.push((field.attribute("valid"), outcome.valid_text().to_string()));
    }
}

fn push_kinded(attrs: &mut Vec<(String, String)>, outcome: &FieldOutcome) {
    push_head(attrs, outcome, true);
    attrs.push((outcome.field().attribute("kind"), outcome.kind().to_string()));
    push_tail(attrs, outcome);
}

fn push_tail(attrs: &mut Vec<(String, String)>, outcome: &FieldOutcome) {
    let field = outcome.field();
    attrs.push((
        field.attribute("issues"),
        outcome
            .issue()
            .map(|code| code.as_str().to_string())
            .unwrap_or_default(),
    ));
    attrs.push((
        field.attribute("recommended_action"),
        outcome.recommended_action().unwrap_or_default().to_string(),
    ));
    attrs.push((field.attribute("normalization_steps"), outcome.steps().joined()));
}
