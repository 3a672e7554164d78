//! Usage report.
//!
//! Sources are visited in this order, each in API list order:
//!
//! ```text
//! computer groups     smart groups only, criteria edges
//! policies            targets, exclusions, scripts, packages
//! config profiles     targets, exclusions
//! advanced searches   criteria edges
//! prestages           custom packages, installed profiles
//! ```

use atlas_client::models::{General, NamedRef, Scope};
use atlas_client::{FetchError, JamfClient, Transport};
use atlas_core::{ObjectType, UsageEdge, UsageLocation, UsageSource};

use crate::criteria::criteria_edges;

/// Builds the list of references between configuration objects.
pub struct UsageReport<'a, T> {
    client: &'a JamfClient<T>,
}

impl<'a, T: Transport> UsageReport<'a, T> {
    #[must_use]
    pub const fn new(client: &'a JamfClient<T>) -> Self {
        Self { client }
    }

    /// Resolve every usage edge.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`]; a failed detail request aborts the
    /// whole report.
    pub async fn build(&self) -> Result<Vec<UsageEdge>, FetchError> {
        let mut edges = Vec::new();
        self.computer_groups(&mut edges).await?;
        self.policies(&mut edges).await?;
        self.configuration_profiles(&mut edges).await?;
        self.advanced_computer_searches(&mut edges).await?;
        self.computer_prestages(&mut edges).await?;
        Ok(edges)
    }

    async fn computer_groups(&self, edges: &mut Vec<UsageEdge>) -> Result<(), FetchError> {
        tracing::info!("resolving computer group criteria");
        for summary in self.client.computer_groups().await? {
            let group = self.client.computer_group(&summary.id).await?;
            if !group.is_smart {
                continue;
            }
            let source = UsageSource::new(ObjectType::ComputerGroup, group.id, group.name);
            edges.extend(criteria_edges(&source, &group.criteria));
        }
        Ok(())
    }

    async fn policies(&self, edges: &mut Vec<UsageEdge>) -> Result<(), FetchError> {
        tracing::info!("resolving policy references");
        for summary in self.client.policies().await? {
            let policy = self.client.policy(&summary.id).await?;
            let source = general_source(ObjectType::Policy, &policy.general);
            scope_edges(&source, &policy.scope, edges);
            reference_edges(&source, ObjectType::Script, None, &policy.scripts, edges);
            reference_edges(
                &source,
                ObjectType::Package,
                None,
                &policy.package_configuration.packages,
                edges,
            );
        }
        Ok(())
    }

    async fn configuration_profiles(&self, edges: &mut Vec<UsageEdge>) -> Result<(), FetchError> {
        tracing::info!("resolving configuration profile references");
        for summary in self.client.configuration_profiles().await? {
            let profile = self.client.configuration_profile(&summary.id).await?;
            let source = general_source(ObjectType::ConfigurationProfile, &profile.general);
            scope_edges(&source, &profile.scope, edges);
        }
        Ok(())
    }

    async fn advanced_computer_searches(
        &self,
        edges: &mut Vec<UsageEdge>,
    ) -> Result<(), FetchError> {
        tracing::info!("resolving advanced computer search criteria");
        for summary in self.client.advanced_computer_searches().await? {
            let search = self.client.advanced_computer_search(&summary.id).await?;
            let source =
                UsageSource::new(ObjectType::AdvancedComputerSearch, search.id, search.name);
            edges.extend(criteria_edges(&source, &search.criteria));
        }
        Ok(())
    }

    /// Prestages reference packages and profiles by id only, so each
    /// reference costs one detail request.
    async fn computer_prestages(&self, edges: &mut Vec<UsageEdge>) -> Result<(), FetchError> {
        tracing::info!("resolving computer prestage references");
        for prestage in self.client.computer_prestages().await? {
            let source = UsageSource::new(
                ObjectType::ComputerPrestage,
                prestage.id,
                prestage.display_name,
            );

            for id in &prestage.custom_package_ids {
                let package = self.client.package(id).await?;
                edges.push(source.edge(
                    ObjectType::Package,
                    None,
                    Some(package.id),
                    Some(package.name),
                ));
            }

            for id in &prestage.prestage_installed_profile_ids {
                let profile = self.client.configuration_profile(id).await?;
                edges.push(source.edge(
                    ObjectType::ConfigurationProfile,
                    None,
                    Some(profile.general.id),
                    Some(profile.general.name),
                ));
            }
        }
        Ok(())
    }
}

fn general_source(object_type: ObjectType, general: &General) -> UsageSource {
    UsageSource {
        object_type,
        id: general.id.clone(),
        name: general.name.clone(),
        category: general.category_name(),
        enabled: general.enabled,
    }
}

/// Target groups, then excluded groups.
fn scope_edges(source: &UsageSource, scope: &Scope, edges: &mut Vec<UsageEdge>) {
    reference_edges(
        source,
        ObjectType::ComputerGroup,
        Some(&UsageLocation::ScopeTargets),
        scope.computer_groups(),
        edges,
    );
    reference_edges(
        source,
        ObjectType::ComputerGroup,
        Some(&UsageLocation::ScopeExclusions),
        scope.excluded_computer_groups(),
        edges,
    );
}

fn reference_edges(
    source: &UsageSource,
    usage_type: ObjectType,
    location: Option<&UsageLocation>,
    references: &[NamedRef],
    edges: &mut Vec<UsageEdge>,
) {
    edges.extend(references.iter().map(|reference| {
        source.edge(
            usage_type,
            location.cloned(),
            Some(reference.id.clone()),
            Some(reference.name.clone()),
        )
    }));
}
