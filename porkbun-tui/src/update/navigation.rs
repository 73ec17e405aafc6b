//! 执行 ScreenCommand：页面切换与派发任务

use crate::message::ScreenCommand;
use crate::model::state::ViewError;
use crate::model::{App, Page};

/// 执行当前视图返回的命令
pub fn execute(app: &mut App, command: ScreenCommand) {
    match command {
        ScreenCommand::None => {}

        ScreenCommand::Back => {
            app.current_page = if app.current_page == Page::Help {
                app.previous_page
            } else {
                Page::DomainList
            };
        }

        ScreenCommand::OpenDetail => {
            if app.selected_domain().is_some() {
                app.detail.show(app.domain_list.selected());
                app.current_page = Page::Detail;
            }
        }

        ScreenCommand::SelectPrevious => {
            app.domain_list.move_up();
            app.detail.show(app.domain_list.selected());
        }

        ScreenCommand::SelectNext => {
            app.domain_list.move_down();
            app.detail.show(app.domain_list.selected());
        }

        ScreenCommand::OpenDns => open_dns(app),

        ScreenCommand::OpenNameservers => open_nameservers(app),

        ScreenCommand::OpenAvailability => {
            if !app.demo {
                app.current_page = Page::Availability;
            }
        }

        ScreenCommand::OpenCostBreakdown => {
            app.current_page = Page::CostBreakdown;
        }

        ScreenCommand::OpenCalendar => {
            app.current_page = Page::Calendar;
        }

        ScreenCommand::Refresh => {
            if let Some(tasks) = app.tasks() {
                log::info!("Refreshing domains and pricing");
                tasks.fetch_domains();
                tasks.fetch_pricing();
                app.refreshing = true;
            }
        }

        ScreenCommand::SaveNameservers(nameservers) => {
            let domain = app.nameservers.domain().to_string();
            match app.tasks() {
                Some(tasks) => {
                    log::info!("Saving {} nameservers for {domain}", nameservers.len());
                    tasks.save_nameservers(&domain, nameservers);
                    app.nameservers.start_saving();
                }
                None => app
                    .nameservers
                    .set_error(ViewError::local("Not available in demo mode")),
            }
        }

        ScreenCommand::CheckAvailability(domain) => match app.tasks() {
            Some(tasks) => tasks.check_availability(&domain),
            None => app
                .availability
                .set_error(ViewError::local("Not available in demo mode")),
        },
    }
}

/// 演示模式下不可用
fn open_dns(app: &mut App) {
    let Some(name) = app.selected_domain().map(|d| d.name.clone()) else {
        return;
    };
    let Some(tasks) = app.tasks() else {
        return;
    };
    tasks.fetch_dns(&name);
    app.dns.set_domain(&name);
    app.current_page = Page::Dns;
}

/// 演示模式下不可用
fn open_nameservers(app: &mut App) {
    let Some(name) = app.selected_domain().map(|d| d.name.clone()) else {
        return;
    };
    let Some(tasks) = app.tasks() else {
        return;
    };
    tasks.fetch_nameservers(&name);
    app.nameservers.set_domain(&name);
    app.current_page = Page::Nameservers;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::backend::mock::{domain_expiring, MockClient};
    use crate::backend::TaskSpawner;
    use crate::message::TaskMessage;
    use crate::update::task::merge;
    use chrono::Utc;
    use porkbun_provider::PricingTable;
    use tokio::runtime::Runtime;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn live_app(rt: &Runtime) -> (App, UnboundedReceiver<TaskMessage>) {
        let now = Utc::now();
        let (tasks, rx) = TaskSpawner::new(rt.handle().clone(), Arc::new(MockClient::default()));
        let app = App::new(
            vec![
                domain_expiring("a.com", now, 10),
                domain_expiring("b.com", now, 20),
            ],
            PricingTable::new(),
        )
        .with_tasks(tasks);
        (app, rx)
    }

    #[test]
    fn demo_mode_disables_remote_views() {
        let mut app = App::demo(Utc::now());
        for command in [
            ScreenCommand::OpenDns,
            ScreenCommand::OpenNameservers,
            ScreenCommand::OpenAvailability,
        ] {
            execute(&mut app, command);
            assert_eq!(app.current_page, Page::DomainList);
        }
        execute(&mut app, ScreenCommand::Refresh);
        assert!(!app.refreshing);

        execute(&mut app, ScreenCommand::OpenCalendar);
        assert_eq!(app.current_page, Page::Calendar);
    }

    #[test]
    fn detail_follows_list_cursor() {
        let mut app = App::demo(Utc::now());
        execute(&mut app, ScreenCommand::OpenDetail);
        assert_eq!(app.current_page, Page::Detail);
        let first = app.detail.domain().map(|d| d.name.clone());

        execute(&mut app, ScreenCommand::SelectNext);
        assert_eq!(app.current_page, Page::Detail);
        assert_ne!(app.detail.domain().map(|d| d.name.clone()), first);

        execute(&mut app, ScreenCommand::SelectPrevious);
        assert_eq!(app.detail.domain().map(|d| d.name.clone()), first);
    }

    #[test]
    fn open_dns_spawns_fetch_for_selected_domain() {
        let rt = Runtime::new().unwrap();
        let (mut app, mut rx) = live_app(&rt);

        execute(&mut app, ScreenCommand::OpenDns);
        assert_eq!(app.current_page, Page::Dns);
        assert!(app.dns.loading);
        assert_eq!(app.dns.domain(), "a.com");

        match rt.block_on(rx.recv()) {
            Some(TaskMessage::DnsLoaded { domain, result }) => {
                assert_eq!(domain, "a.com");
                assert_eq!(result.unwrap().len(), 1);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn refresh_spawns_domains_and_pricing() {
        let rt = Runtime::new().unwrap();
        let (mut app, mut rx) = live_app(&rt);
        app.refreshing = false;

        execute(&mut app, ScreenCommand::Refresh);
        assert!(app.refreshing);

        let mut names = vec![
            rt.block_on(rx.recv()).unwrap().name(),
            rt.block_on(rx.recv()).unwrap().name(),
        ];
        names.sort_unstable();
        assert_eq!(names, vec!["domains", "pricing"]);
    }

    #[test]
    fn save_nameservers_marks_saving() {
        let rt = Runtime::new().unwrap();
        let (mut app, mut rx) = live_app(&rt);
        execute(&mut app, ScreenCommand::OpenNameservers);
        let _ = rt.block_on(rx.recv());

        execute(
            &mut app,
            ScreenCommand::SaveNameservers(vec!["ns1.x.net".into()]),
        );
        assert!(app.nameservers.saving);
        assert!(matches!(
            rt.block_on(rx.recv()),
            Some(TaskMessage::NameserversSaved { result: Ok(()), .. })
        ));
    }

    #[test]
    fn detail_stays_on_selection_after_domains_reload() {
        let rt = Runtime::new().unwrap();
        let now = Utc::now();
        let domains = vec![
            domain_expiring("a.com", now, 10),
            domain_expiring("b.com", now, 20),
            domain_expiring("c.com", now, 30),
        ];
        let (tasks, mut rx) =
            TaskSpawner::new(rt.handle().clone(), Arc::new(MockClient::default()));
        let mut app = App::new(domains.clone(), PricingTable::new()).with_tasks(tasks);

        execute(&mut app, ScreenCommand::OpenDetail);
        execute(&mut app, ScreenCommand::SelectNext);
        execute(&mut app, ScreenCommand::SelectNext);
        assert_eq!(app.detail.domain().map(|d| d.name.as_str()), Some("c.com"));

        // 后台刷新落地：列表光标回到开头，详情页必须跟上
        merge(&mut app, TaskMessage::DomainsLoaded(Ok(domains)));
        assert_eq!(app.current_page, Page::Detail);
        let shown = app.detail.domain().map(|d| d.name.clone());
        assert_eq!(shown, app.selected_domain().map(|d| d.name.clone()));
        assert_eq!(shown.as_deref(), Some("a.com"));

        execute(&mut app, ScreenCommand::SelectNext);
        assert_eq!(app.detail.domain().map(|d| d.name.as_str()), Some("b.com"));

        execute(&mut app, ScreenCommand::OpenDns);
        assert_eq!(app.current_page, Page::Dns);
        assert_eq!(app.dns.domain(), "b.com");
        assert!(matches!(
            rt.block_on(rx.recv()),
            Some(TaskMessage::DnsLoaded { domain, .. }) if domain == "b.com"
        ));
    }

    #[test]
    fn emptied_list_clears_detail() {
        let mut app = App::demo(Utc::now());
        execute(&mut app, ScreenCommand::OpenDetail);
        assert!(app.detail.domain().is_some());

        app.set_domains(Vec::new());
        assert!(app.detail.domain().is_none());
    }
}
