//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation of
//! concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Consistent formatting with priority icons and structured sections
//! - Context-aware display behavior for different use cases

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::catalog::{self, CatalogEntry};
use crate::models::{
    ProfessionalRole, Purchase, PurchaseStatus, PurchaseSummary, RequiredTask, TaskPriority,
    UserRole,
};

impl fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ProfessionalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RequiredTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.priority.with_icon())?;
        writeln!(f)?;

        writeln!(f, "- Due: {}", LocalDate(&self.due_date))?;
        writeln!(f, "- Action: {}", self.action_link)?;

        // Description as a paragraph
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Purchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} (ID: {})", self.plan.name, self.id)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Status: {}", self.status.as_str())?;
        writeln!(f, "- Buyer: {} ({})", self.buyer.name_or("Cliente"), self.buyer.id)?;
        writeln!(
            f,
            "- Professional: {} ({})",
            self.professional.name_or("Profissional"),
            self.professional.id
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        // Plan description as a paragraph
        if let Some(desc) = &self.plan.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if !self.plan.features.is_empty() {
            writeln!(f, "\n## Features")?;
            writeln!(f)?;
            for feature in &self.plan.features {
                let icon = if feature.is_completed { "✓" } else { "○" };
                // Show the catalog label when the id is known, the raw id otherwise.
                match catalog::find(&feature.id) {
                    Some(entry) => writeln!(f, "- {icon} {}", entry.label)?,
                    None => writeln!(f, "- {icon} {}", feature.id)?,
                }
            }
        } else {
            writeln!(f, "\nNo features in this plan.")?;
        }

        Ok(())
    }
}

impl fmt::Display for PurchaseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_features > 0 {
            format!(" ({}/{})", self.completed_features, self.total_features)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.plan_name, self.id)?;
        writeln!(f)?;

        writeln!(f, "- **Status**: {}", self.status.as_str())?;

        if let Some(buyer) = &self.buyer_name {
            writeln!(f, "- **Buyer**: {buyer}")?;
        }

        if let Some(professional) = &self.professional_name {
            writeln!(f, "- **Professional**: {professional}")?;
        }

        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?; // Add blank line after each purchase

        Ok(())
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} (`{}`)", self.label, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Role: {}", self.role.as_str())?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        Ok(())
    }
}
