//! OCPP 2.0.1 Device Model.
//!
//! Grounded in `IDeviceModel20.h`/`DeviceModelManager20.cpp`: a forest of
//! Components (disambiguated by name + instance + optional EVSE/Connector
//! scope), each owning Variables, each Variable carrying an Attribute
//! (value + mutability) and Characteristics (type/limits/allowed values)
//! used to sanity-check writes before they reach the application listener.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    Actual,
    Target,
    MinSet,
    MaxSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

/// One typed value slot of a Variable (spec.md §3.6's `attributes`).
#[derive(Debug, Clone)]
pub struct VariableAttribute {
    pub attribute_type: AttributeType,
    pub mutability: Mutability,
    pub persistent: bool,
    pub constant: bool,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    String,
    Decimal,
    Integer,
    DateTime,
    Boolean,
    OptionList,
    SequenceList,
    MemberList,
}

/// Constraints a write must satisfy, and the metadata `GetBaseReport`
/// streams back (spec.md §3.6's `characteristics`).
#[derive(Debug, Clone)]
pub struct VariableCharacteristics {
    pub data_type: DataType,
    pub unit: Option<String>,
    pub min_limit: Option<f64>,
    pub max_limit: Option<f64>,
    /// Comma-separated allowed values for `OptionList`/`MemberList`/`SequenceList`.
    pub values_list: Option<String>,
    pub supports_monitoring: bool,
}

#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub instance: Option<String>,
    pub attributes: Vec<VariableAttribute>,
    pub characteristics: VariableCharacteristics,
}

impl Variable {
    fn attribute(&self, attribute_type: AttributeType) -> Option<&VariableAttribute> {
        self.attributes.iter().find(|a| a.attribute_type == attribute_type)
    }

    fn attribute_mut(&mut self, attribute_type: AttributeType) -> Option<&mut VariableAttribute> {
        self.attributes.iter_mut().find(|a| a.attribute_type == attribute_type)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ComponentScope {
    pub evse_id: Option<u32>,
    pub connector_id: Option<u32>,
}

pub struct Component {
    pub name: String,
    pub instance: Option<String>,
    pub scope: ComponentScope,
    pub variables: Vec<Variable>,
}

impl Component {
    fn matches(&self, name: &str, instance: Option<&str>, scope: &ComponentScope) -> bool {
        self.name == name
            && self.instance.as_deref() == instance
            && self.scope.evse_id == scope.evse_id
            && self.scope.connector_id == scope.connector_id
    }

    fn variable(&self, name: &str, instance: Option<&str>) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name && v.instance.as_deref() == instance)
    }

    fn variable_mut(&mut self, name: &str, instance: Option<&str>) -> Option<&mut Variable> {
        self.variables.iter_mut().find(|v| v.name == name && v.instance.as_deref() == instance)
    }
}

/// Result of `getVariable`/`setVariable`/`updateVariable`, mirroring
/// `GetVariableResultType`/`SetVariableResultType`'s status vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableStatus {
    Accepted,
    Rejected,
    UnknownComponent,
    UnknownVariable,
    NotSupportedAttributeType,
    OutOfRange,
    TooLong,
    RebootRequired,
}

/// Level of detail `GetBaseReport` streams, matching `ReportBaseEnumType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportBase {
    FullInventory,
    ConfigurationInventory,
    SummaryInventory,
}

/// The 2.0.1 Device Model: components keyed by name, each potentially
/// present multiple times (disambiguated by instance/scope), matching
/// `DeviceModel::components: map<string, vector<Component>>`.
pub struct DeviceModel {
    components: Mutex<HashMap<String, Vec<Component>>>,
}

impl Default for DeviceModel {
    fn default() -> Self {
        DeviceModel { components: Mutex::new(HashMap::new()) }
    }
}

impl DeviceModel {
    pub fn insert_component(&self, component: Component) {
        self.components
            .lock()
            .expect("device model mutex poisoned")
            .entry(component.name.clone())
            .or_default()
            .push(component);
    }

    fn with_component<R>(
        &self,
        name: &str,
        instance: Option<&str>,
        scope: &ComponentScope,
        f: impl FnOnce(&Component) -> R,
    ) -> Option<R> {
        let components = self.components.lock().expect("device model mutex poisoned");
        let candidates = components.get(name)?;
        let component = candidates.iter().find(|c| c.matches(name, instance, scope))?;
        Some(f(component))
    }

    fn with_component_mut<R>(
        &self,
        name: &str,
        instance: Option<&str>,
        scope: &ComponentScope,
        f: impl FnOnce(&mut Component) -> R,
    ) -> Option<R> {
        let mut components = self.components.lock().expect("device model mutex poisoned");
        let candidates = components.get_mut(name)?;
        let component = candidates.iter_mut().find(|c| c.matches(name, instance, scope))?;
        Some(f(component))
    }

    /// Resolves component → variable → attribute (default `Actual`),
    /// matching `DeviceModelManager::getVariable`.
    pub fn get_variable(
        &self,
        component: &str,
        component_instance: Option<&str>,
        scope: &ComponentScope,
        variable: &str,
        variable_instance: Option<&str>,
        attribute_type: Option<AttributeType>,
    ) -> (VariableStatus, Option<String>) {
        let attribute_type = attribute_type.unwrap_or(AttributeType::Actual);
        let found = self.with_component(component, component_instance, scope, |c| {
            c.variable(variable, variable_instance).and_then(|v| v.attribute(attribute_type).cloned())
        });
        match found {
            None if !self.component_exists(component, component_instance, scope) => (VariableStatus::UnknownComponent, None),
            None => {
                let variable_exists = self
                    .with_component(component, component_instance, scope, |c| c.variable(variable, variable_instance).is_some())
                    .unwrap_or(false);
                if variable_exists {
                    (VariableStatus::NotSupportedAttributeType, None)
                } else {
                    (VariableStatus::UnknownVariable, None)
                }
            }
            Some(attr) => (VariableStatus::Accepted, attr.value),
        }
    }

    fn component_exists(&self, component: &str, instance: Option<&str>, scope: &ComponentScope) -> bool {
        self.with_component(component, instance, scope, |_| ()).is_some()
    }

    fn is_valid_value(characteristics: &VariableCharacteristics, value: &str) -> bool {
        match characteristics.data_type {
            DataType::Integer | DataType::Decimal => {
                let Ok(parsed) = value.parse::<f64>() else { return false };
                if let Some(min) = characteristics.min_limit {
                    if parsed < min {
                        return false;
                    }
                }
                if let Some(max) = characteristics.max_limit {
                    if parsed > max {
                        return false;
                    }
                }
                true
            }
            DataType::String | DataType::OptionList | DataType::MemberList | DataType::SequenceList => {
                if let Some(max) = characteristics.max_limit {
                    if value.len() as f64 > max {
                        return false;
                    }
                }
                match characteristics.data_type {
                    DataType::OptionList | DataType::MemberList | DataType::SequenceList => {
                        let Some(allowed) = &characteristics.values_list else { return true };
                        let allowed: Vec<&str> = allowed.split(',').map(|s| s.trim()).collect();
                        value.split(',').map(|s| s.trim()).all(|v| allowed.contains(&v))
                    }
                    _ => true,
                }
            }
            DataType::DateTime | DataType::Boolean => true,
        }
    }

    /// Sets a variable's `Actual` attribute after the characteristics
    /// sanity check described in spec.md §3.6; delegates acceptance to the
    /// caller-supplied `accept` closure (the application listener).
    pub fn set_variable(
        &self,
        component: &str,
        component_instance: Option<&str>,
        scope: &ComponentScope,
        variable: &str,
        variable_instance: Option<&str>,
        attribute_type: Option<AttributeType>,
        value: &str,
        accept: impl FnOnce(&str) -> bool,
    ) -> Result<VariableStatus, StoreError> {
        self.write_variable(component, component_instance, scope, variable, variable_instance, attribute_type, value, true, accept)
    }

    /// Writes a variable's `Actual` attribute without a value/mutability
    /// check, matching `DeviceModelManager::updateVariable` — used for
    /// internal propagation such as reflecting connector status into
    /// `AvailabilityState`.
    pub fn update_variable(
        &self,
        component: &str,
        component_instance: Option<&str>,
        scope: &ComponentScope,
        variable: &str,
        variable_instance: Option<&str>,
        attribute_type: Option<AttributeType>,
        value: &str,
    ) -> VariableStatus {
        self.write_variable(component, component_instance, scope, variable, variable_instance, attribute_type, value, false, |_| true)
            .unwrap_or(VariableStatus::UnknownComponent)
    }

    #[allow(clippy::too_many_arguments)]
    fn write_variable(
        &self,
        component: &str,
        component_instance: Option<&str>,
        scope: &ComponentScope,
        variable: &str,
        variable_instance: Option<&str>,
        attribute_type: Option<AttributeType>,
        value: &str,
        check_value: bool,
        accept: impl FnOnce(&str) -> bool,
    ) -> Result<VariableStatus, StoreError> {
        let attribute_type = attribute_type.unwrap_or(AttributeType::Actual);
        if !self.component_exists(component, component_instance, scope) {
            return Ok(VariableStatus::UnknownComponent);
        }
        let variable_exists = self
            .with_component(component, component_instance, scope, |c| c.variable(variable, variable_instance).is_some())
            .unwrap_or(false);
        if !variable_exists {
            return Ok(VariableStatus::UnknownVariable);
        }

        if check_value {
            let (mutability, characteristics) = self
                .with_component(component, component_instance, scope, |c| {
                    let v = c.variable(variable, variable_instance).expect("checked above");
                    (v.attribute(attribute_type).map(|a| a.mutability), v.characteristics.clone())
                })
                .expect("component checked above");

            match mutability {
                None => return Ok(VariableStatus::NotSupportedAttributeType),
                Some(Mutability::ReadOnly) => return Ok(VariableStatus::Rejected),
                Some(_) => {}
            }
            if !Self::is_valid_value(&characteristics, value) {
                return Ok(VariableStatus::OutOfRange);
            }
            if !accept(value) {
                return Ok(VariableStatus::Rejected);
            }
        }

        self.with_component_mut(component, component_instance, scope, |c| {
            let variable = c.variable_mut(variable, variable_instance).expect("checked above");
            if let Some(attr) = variable.attribute_mut(attribute_type) {
                attr.value = Some(value.to_string());
                Ok(VariableStatus::Accepted)
            } else {
                Ok(VariableStatus::NotSupportedAttributeType)
            }
        })
        .expect("component checked above")
    }

    /// Selects the variables `GetBaseReport` should stream for `report`.
    /// `SummaryInventory` is not implemented (spec.md §4.8), returning
    /// `None` for the caller to respond `NotSupported`.
    pub fn report(&self, report: ReportBase) -> Option<Vec<(String, String)>> {
        if report == ReportBase::SummaryInventory {
            return None;
        }
        let components = self.components.lock().expect("device model mutex poisoned");
        let mut out = Vec::new();
        for candidates in components.values() {
            for component in candidates {
                for variable in &component.variables {
                    let mutable_or_untyped = variable
                        .attributes
                        .iter()
                        .any(|a| a.mutability != Mutability::ReadOnly);
                    if report == ReportBase::ConfigurationInventory && !mutable_or_untyped {
                        continue;
                    }
                    if let Some(attr) = variable.attribute(AttributeType::Actual) {
                        out.push((
                            format!("{}.{}", component.name, variable.name),
                            attr.value.clone().unwrap_or_default(),
                        ));
                    }
                }
            }
        }
        Some(out)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample_component() -> Component {
        Component {
            name: "OCPPCommCtrlr".to_string(),
            instance: None,
            scope: ComponentScope::default(),
            variables: vec![Variable {
                name: "HeartbeatInterval".to_string(),
                instance: None,
                attributes: vec![VariableAttribute {
                    attribute_type: AttributeType::Actual,
                    mutability: Mutability::ReadWrite,
                    persistent: true,
                    constant: false,
                    value: Some("60".to_string()),
                }],
                characteristics: VariableCharacteristics {
                    data_type: DataType::Integer,
                    unit: Some("s".to_string()),
                    min_limit: Some(0.0),
                    max_limit: Some(86400.0),
                    values_list: None,
                    supports_monitoring: false,
                },
            }],
        }
    }

    #[test]
    fn get_variable_on_unknown_component_is_unknown_component() {
        let model = DeviceModel::default();
        let (status, _) = model.get_variable("Nope", None, &ComponentScope::default(), "X", None, None);
        assert_eq!(status, VariableStatus::UnknownComponent);
    }

    #[test]
    fn get_variable_returns_actual_by_default() {
        let model = DeviceModel::default();
        model.insert_component(sample_component());
        let (status, value) = model.get_variable("OCPPCommCtrlr", None, &ComponentScope::default(), "HeartbeatInterval", None, None);
        assert_eq!(status, VariableStatus::Accepted);
        assert_eq!(value.as_deref(), Some("60"));
    }

    #[test]
    fn set_variable_rejects_out_of_range() {
        let model = DeviceModel::default();
        model.insert_component(sample_component());
        let status = model
            .set_variable("OCPPCommCtrlr", None, &ComponentScope::default(), "HeartbeatInterval", None, None, "999999", |_| true)
            .unwrap();
        assert_eq!(status, VariableStatus::OutOfRange);
    }

    #[test]
    fn set_variable_accepts_in_range_value() {
        let model = DeviceModel::default();
        model.insert_component(sample_component());
        let status = model
            .set_variable("OCPPCommCtrlr", None, &ComponentScope::default(), "HeartbeatInterval", None, None, "120", |_| true)
            .unwrap();
        assert_eq!(status, VariableStatus::Accepted);
        let (_, value) = model.get_variable("OCPPCommCtrlr", None, &ComponentScope::default(), "HeartbeatInterval", None, None);
        assert_eq!(value.as_deref(), Some("120"));
    }

    #[test]
    fn update_variable_bypasses_value_check() {
        let model = DeviceModel::default();
        model.insert_component(sample_component());
        let status = model.update_variable("OCPPCommCtrlr", None, &ComponentScope::default(), "HeartbeatInterval", None, None, "999999");
        assert_eq!(status, VariableStatus::Accepted);
    }

    #[test]
    fn summary_inventory_report_is_not_implemented() {
        let model = DeviceModel::default();
        model.insert_component(sample_component());
        assert!(model.report(ReportBase::SummaryInventory).is_none());
    }

    #[test]
    fn full_inventory_report_includes_every_variable() {
        let model = DeviceModel::default();
        model.insert_component(sample_component());
        let report = model.report(ReportBase::FullInventory).unwrap();
        assert_eq!(report, vec![("OCPPCommCtrlr.HeartbeatInterval".to_string(), "60".to_string())]);
    }
}
