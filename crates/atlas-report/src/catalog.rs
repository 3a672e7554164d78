//! Object catalog.
//!
//! Categories, computer groups and advanced searches are copied from their
//! list endpoints. Every other kind is enriched with one detail request per
//! object. Prestages come from the paginated v3 list.

use atlas_client::{FetchError, JamfClient, Transport};
use atlas_core::{ConfigObject, ObjectType};

use crate::scope::summarize_scope;

/// Kinds included in the full object catalog, in emission order.
pub const OBJECT_SECTIONS: &[ObjectType] = &ObjectType::ALL;

/// Kinds included in the resource inventory.
pub const RESOURCE_SECTIONS: &[ObjectType] = &[
    ObjectType::ComputerGroup,
    ObjectType::Policy,
    ObjectType::ConfigurationProfile,
    ObjectType::Package,
    ObjectType::Script,
    ObjectType::ComputerPrestage,
];

/// Builds a flat catalog of configuration objects.
pub struct ObjectCatalog<'a, T> {
    client: &'a JamfClient<T>,
    sections: &'static [ObjectType],
}

impl<'a, T: Transport> ObjectCatalog<'a, T> {
    /// Catalog of every object kind.
    #[must_use]
    pub const fn new(client: &'a JamfClient<T>) -> Self {
        Self {
            client,
            sections: OBJECT_SECTIONS,
        }
    }

    /// Catalog restricted to [`RESOURCE_SECTIONS`].
    #[must_use]
    pub const fn resources(client: &'a JamfClient<T>) -> Self {
        Self {
            client,
            sections: RESOURCE_SECTIONS,
        }
    }

    /// Fetch and flatten every object of the configured kinds.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`]; nothing collected so far is returned.
    pub async fn build(&self) -> Result<Vec<ConfigObject>, FetchError> {
        let mut objects = Vec::new();
        for &section in self.sections {
            let before = objects.len();
            tracing::info!(object_type = %section, "collecting objects");
            self.collect(section, &mut objects).await?;
            tracing::debug!(
                object_type = %section,
                count = objects.len() - before,
                "collected objects"
            );
        }
        Ok(objects)
    }

    async fn collect(
        &self,
        section: ObjectType,
        objects: &mut Vec<ConfigObject>,
    ) -> Result<(), FetchError> {
        match section {
            ObjectType::Category => self.categories(objects).await,
            ObjectType::ComputerGroup => self.computer_groups(objects).await,
            ObjectType::Policy => self.policies(objects).await,
            ObjectType::ConfigurationProfile => self.configuration_profiles(objects).await,
            ObjectType::ExtensionAttribute => self.extension_attributes(objects).await,
            ObjectType::Package => self.packages(objects).await,
            ObjectType::Script => self.scripts(objects).await,
            ObjectType::AdvancedComputerSearch => self.advanced_computer_searches(objects).await,
            ObjectType::ComputerPrestage => self.computer_prestages(objects).await,
        }
    }

    async fn categories(&self, objects: &mut Vec<ConfigObject>) -> Result<(), FetchError> {
        objects.extend(
            self.client
                .categories()
                .await?
                .into_iter()
                .map(|c| ConfigObject::Category {
                    id: c.id,
                    name: c.name,
                }),
        );
        Ok(())
    }

    async fn computer_groups(&self, objects: &mut Vec<ConfigObject>) -> Result<(), FetchError> {
        objects.extend(
            self.client
                .computer_groups()
                .await?
                .into_iter()
                .map(|g| ConfigObject::ComputerGroup {
                    id: g.id,
                    name: g.name,
                    is_smart: g.is_smart,
                }),
        );
        Ok(())
    }

    async fn policies(&self, objects: &mut Vec<ConfigObject>) -> Result<(), FetchError> {
        for summary in self.client.policies().await? {
            let policy = self.client.policy(&summary.id).await?;
            objects.push(ConfigObject::Policy {
                category: policy.general.category_name(),
                enabled: policy.general.enabled,
                scope: summarize_scope(&policy.scope),
                id: policy.general.id,
                name: policy.general.name,
            });
        }
        Ok(())
    }

    async fn configuration_profiles(
        &self,
        objects: &mut Vec<ConfigObject>,
    ) -> Result<(), FetchError> {
        for summary in self.client.configuration_profiles().await? {
            let profile = self.client.configuration_profile(&summary.id).await?;
            objects.push(ConfigObject::ConfigurationProfile {
                category: profile.general.category_name(),
                scope: summarize_scope(&profile.scope),
                id: profile.general.id,
                name: profile.general.name,
            });
        }
        Ok(())
    }

    async fn extension_attributes(
        &self,
        objects: &mut Vec<ConfigObject>,
    ) -> Result<(), FetchError> {
        for summary in self.client.extension_attributes().await? {
            let attribute = self.client.extension_attribute(&summary.id).await?;
            objects.push(ConfigObject::ExtensionAttribute {
                id: attribute.id,
                name: attribute.name,
                enabled: attribute.enabled,
            });
        }
        Ok(())
    }

    async fn packages(&self, objects: &mut Vec<ConfigObject>) -> Result<(), FetchError> {
        for summary in self.client.packages().await? {
            let package = self.client.package(&summary.id).await?;
            objects.push(ConfigObject::Package {
                id: package.id,
                name: package.name,
                category: package.category,
            });
        }
        Ok(())
    }

    async fn scripts(&self, objects: &mut Vec<ConfigObject>) -> Result<(), FetchError> {
        for summary in self.client.scripts().await? {
            let script = self.client.script(&summary.id).await?;
            objects.push(ConfigObject::Script {
                id: script.id,
                name: script.name,
                category: script.category,
            });
        }
        Ok(())
    }

    async fn advanced_computer_searches(
        &self,
        objects: &mut Vec<ConfigObject>,
    ) -> Result<(), FetchError> {
        objects.extend(
            self.client
                .advanced_computer_searches()
                .await?
                .into_iter()
                .map(|s| ConfigObject::AdvancedComputerSearch {
                    id: s.id,
                    name: s.name,
                }),
        );
        Ok(())
    }

    async fn computer_prestages(&self, objects: &mut Vec<ConfigObject>) -> Result<(), FetchError> {
        objects.extend(
            self.client
                .computer_prestages()
                .await?
                .into_iter()
                .map(|p| ConfigObject::ComputerPrestage {
                    id: p.id,
                    name: p.display_name,
                }),
        );
        Ok(())
    }
}
