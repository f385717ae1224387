use std::collections::HashMap;

/// Known Entra ID diagnostic log categories and their table name prefixes.
const KNOWN_CATEGORIES: &[(&str, &str)] = &[
    ("AuditLogs", "EntraIDAuditLogs"),
    ("SignInLogs", "EntraIDSignInLogs"),
    ("NonInteractiveUserSignInLogs", "EntraIDNonInteractiveSignInLogs"),
    ("ServicePrincipalSignInLogs", "EntraIDServicePrincipalSignInLogs"),
    ("ManagedIdentitySignInLogs", "EntraIDManagedIdentitySignInLogs"),
    ("ProvisioningLogs", "EntraIDProvisioningLogs"),
    ("ADFSSignInLogs", "EntraIDADFSSignInLogs"),
    ("RiskyUsers", "EntraIDRiskyUsers"),
    ("UserRiskEvents", "EntraIDUserRiskEvents"),
    ("NetworkAccessTrafficLogs", "EntraIDNetworkAccessTrafficLogs"),
    ("RiskyServicePrincipals", "EntraIDRiskyServicePrincipals"),
    ("ServicePrincipalRiskEvents", "EntraIDServicePrincipalRiskEvents"),
    ("EnrichedOffice365AuditLogs", "EntraIDEnrichedOffice365AuditLogs"),
    ("MicrosoftGraphActivityLogs", "EntraIDMicrosoftGraphActivityLogs"),
    ("RemoteNetworkHealthLogs", "EntraIDRemoteNetworkHealthLogs"),
    ("B2CRequestLogs", "EntraIDB2CRequestLogs"),
];

/// Maps log categories to custom table names in the destination workspace.
///
/// Table names are `EntraID<Category>_{tenant}_CL`; categories outside the
/// known set fall back to the `EntraIDOther` table. Built once from the
/// tenant name and immutable afterwards.
#[derive(Debug)]
pub struct TableMap {
    tables: HashMap<&'static str, String>,
    fallback: String,
}

impl TableMap {
    pub fn new(tenant_name: &str) -> Self {
        let tables = KNOWN_CATEGORIES
            .iter()
            .map(|(category, prefix)| (*category, format!("{prefix}_{tenant_name}_CL")))
            .collect();

        Self {
            tables,
            fallback: format!("EntraIDOther_{tenant_name}_CL"),
        }
    }

    /// Destination table for a category. Total: unknown categories resolve
    /// to the fallback table.
    pub fn table_for(&self, category: &str) -> &str {
        self.tables
            .get(category)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category() {
        let tables = TableMap::new("Contoso");
        assert_eq!(tables.table_for("AuditLogs"), "EntraIDAuditLogs_Contoso_CL");
        assert_eq!(
            tables.table_for("NonInteractiveUserSignInLogs"),
            "EntraIDNonInteractiveSignInLogs_Contoso_CL"
        );
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let tables = TableMap::new("Contoso");
        assert_eq!(tables.table_for("SomethingNew"), "EntraIDOther_Contoso_CL");
        assert_eq!(tables.table_for(""), "EntraIDOther_Contoso_CL");
        assert_eq!(tables.table_for("Unknown"), "EntraIDOther_Contoso_CL");
    }

    #[test]
    fn test_all_tables_carry_tenant_and_suffix() {
        let tables = TableMap::new("Fabrikam");
        for (category, _) in KNOWN_CATEGORIES {
            let table = tables.table_for(category);
            assert!(table.contains("_Fabrikam_"), "{table}");
            assert!(table.ends_with("_CL"), "{table}");
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let tables = TableMap::new("Contoso");
        assert_eq!(tables.table_for("auditlogs"), "EntraIDOther_Contoso_CL");
    }
}
