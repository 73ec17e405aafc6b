//! 合并后台任务的结果

use crate::message::TaskMessage;
use crate::model::state::ViewError;
use crate::model::App;

const NS_SAVED: &str = "Nameservers updated successfully!";

/// 把一条任务结果合并进 App
pub fn merge(app: &mut App, msg: TaskMessage) {
    match msg {
        TaskMessage::DomainsLoaded(Ok(domains)) => {
            log::info!("Loaded {} domains", domains.len());
            app.loading = false;
            app.refreshing = false;
            app.error = None;
            if let Some(cache) = app.cache() {
                if let Err(e) = cache.save_domains(&domains) {
                    log::warn!("Failed to save domain snapshot: {e}");
                }
            }
            app.set_domains(domains);
        }

        TaskMessage::DomainsLoaded(Err(e)) => {
            log::error!("Failed to load domains: {e}");
            app.loading = false;
            app.refreshing = false;
            app.error = Some(e.to_string());
        }

        TaskMessage::PricingLoaded(Ok(pricing)) => {
            log::info!("Loaded pricing for {} TLDs", pricing.len());
            if let Some(cache) = app.cache() {
                if let Err(e) = cache.save_pricing(&pricing) {
                    log::warn!("Failed to save pricing snapshot: {e}");
                }
            }
            app.set_pricing(pricing);
        }

        TaskMessage::PricingLoaded(Err(e)) => {
            log::debug!("Pricing unavailable: {e}");
        }

        TaskMessage::DnsLoaded { domain, result } => {
            if domain != app.dns.domain() {
                log::debug!("Dropping stale DNS result for {domain}");
                return;
            }
            match result {
                Ok(records) => app.dns.set_records(records),
                Err(e) => {
                    log::warn!("Failed to load DNS records for {domain}: {e}");
                    app.dns.set_error(ViewError::from(&e));
                }
            }
        }

        TaskMessage::NameserversLoaded { domain, result } => {
            if domain != app.nameservers.domain() {
                log::debug!("Dropping stale nameserver result for {domain}");
                return;
            }
            match result {
                Ok(nameservers) => app.nameservers.set_nameservers(nameservers),
                Err(e) => {
                    log::warn!("Failed to load nameservers for {domain}: {e}");
                    app.nameservers.set_error(ViewError::from(&e));
                }
            }
        }

        TaskMessage::NameserversSaved { domain, result } => {
            if domain != app.nameservers.domain() {
                log::debug!("Dropping stale nameserver save result for {domain}");
                return;
            }
            match result {
                Ok(()) => {
                    log::info!("Updated nameservers for {domain}");
                    app.nameservers.set_success(NS_SAVED);
                    if let Some(tasks) = app.tasks() {
                        tasks.fetch_nameservers(&domain);
                    }
                }
                Err(e) => {
                    log::warn!("Failed to update nameservers for {domain}: {e}");
                    app.nameservers.set_error(ViewError::from(&e));
                }
            }
        }

        TaskMessage::AvailabilityChecked(result) => match result {
            Ok(found) => app.availability.record_result(found),
            Err(e) => app.availability.set_error(ViewError::from(&e)),
        },
    }
}
