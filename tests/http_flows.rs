use anyhow::Result;
#[cfg(feature = "blocking")]
use jenkins_remote::BlockingClient;
#[cfg(feature = "async")]
use jenkins_remote::Client;
#[cfg(feature = "blocking")]
use jenkins_remote::{ErrorKind, Node};
use serde_json::json;
#[cfg(feature = "blocking")]
use tokio::task;
use wiremock::{
    Match, Mock, MockServer, Request, ResponseTemplate,
    matchers::{body_string, body_string_contains, header, method, path, query_param},
};

#[derive(Clone, Copy)]
struct CrumbHeader(&'static str);

impl Match for CrumbHeader {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get("Jenkins-Crumb")
            .and_then(|value| value.to_str().ok())
            .map(|value| value == self.0)
            .unwrap_or(false)
    }
}

/// Matches requests that carry no crumb header at all.
#[derive(Clone, Copy)]
struct NoCrumbHeader;

impl Match for NoCrumbHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("Jenkins-Crumb")
    }
}

#[derive(Clone, Copy)]
struct NoAuthorization;

impl Match for NoAuthorization {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("Authorization")
    }
}

async fn mock_crumb(server: &MockServer, crumb: &'static str, expected: u64) {
    Mock::given(method("GET"))
        .and(path("/crumbIssuer/api/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "crumbRequestField": "Jenkins-Crumb",
            "crumb": crumb
        })))
        .expect(expected)
        .mount(server)
        .await;
}

async fn mock_get(server: &MockServer, endpoint: &str, response: ResponseTemplate, expected: u64) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(response)
        .expect(expected)
        .mount(server)
        .await;
}

fn main_view() -> serde_json::Value {
    json!({
        "_class": "hudson.model.Hudson",
        "jobs": [
            {"name": "Foo", "url": "http://ci/job/Foo/", "color": "blue"},
            {"name": "bar", "url": "http://ci/job/bar/", "color": "red"}
        ],
        "views": [
            {"name": "All", "url": "http://ci/"},
            {"name": "Team", "url": "http://ci/view/Team/"}
        ],
        "useCrumbs": true
    })
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_get_maps_404_to_none_and_other_failures_to_errors() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(&server, "/job/missing/api/json", ResponseTemplate::new(404), 2).await;
    mock_get(
        &server,
        "/job/broken/api/json",
        ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})),
        1,
    )
    .await;
    mock_get(
        &server,
        "/job/plain/api/json",
        ResponseTemplate::new(200).set_body_string("plain text"),
        1,
    )
    .await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder(base_url)?.build()?;

        assert!(client.get_text("/job/missing")?.is_none());
        assert!(client.jobs().get("missing")?.is_none());

        let err = client.get_text("/job/broken").unwrap_err();
        assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
        assert_eq!(err.reason(), Some("Internal Server Error"));
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.http().and_then(|e| e.message.as_deref()), Some("boom"));

        assert_eq!(client.get_text("/job/plain")?.as_deref(), Some("plain text"));
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_jobs_list_is_keyed_by_lowercase_name() -> Result<()> {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/api/json",
        ResponseTemplate::new(200).set_body_json(main_view()),
        2,
    )
    .await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder(base_url)?.build()?;

        let jobs = client.jobs().list()?;
        let mut keys: Vec<_> = jobs.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["bar", "foo"]);
        assert_eq!(jobs["foo"].name, "Foo");
        assert_eq!(jobs["bar"].name, "bar");

        let views = client.views().list()?;
        assert_eq!(views["team"].name, "Team");
        assert!(views.contains_key("all"));
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_job_delete_sends_fresh_crumb_each_time() -> Result<()> {
    let server = MockServer::start().await;

    mock_crumb(&server, "token-1", 2).await;
    Mock::given(method("POST"))
        .and(path("/job/my%20job/doDelete"))
        .and(CrumbHeader("token-1"))
        .and(header("Authorization", "Basic dXNlcjp0b2tlbg=="))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder(base_url)?
            .auth_basic("user", "token")
            .build()?;

        client.jobs().delete("my job")?;
        client.jobs().delete("my job")?;
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_missing_crumb_issuer_sends_no_crumb_header() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(&server, "/crumbIssuer/api/json", ResponseTemplate::new(404), 1).await;
    Mock::given(method("POST"))
        .and(path("/createItem"))
        .and(query_param("name", "new job"))
        .and(header("Content-Type", "application/xml"))
        .and(body_string("<project/>"))
        .and(NoCrumbHeader)
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder(base_url)?.build()?;
        client.jobs().create("new job", "<project/>")?;
        Ok(())
    })
    .await??;

    let requests = server.received_requests().await.unwrap_or_default();
    let create = requests
        .iter()
        .find(|r| r.url.path() == "/createItem")
        .map(|r| r.url.query().unwrap_or_default().to_owned());
    assert_eq!(create.as_deref(), Some("name=new%20job"));

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_job_config_round_trip_and_chained_calls() -> Result<()> {
    let server = MockServer::start().await;
    let job_url = format!("{}/job/nightly/", server.uri());

    mock_get(
        &server,
        "/job/nightly/api/json",
        ResponseTemplate::new(200).set_body_json(json!({
            "name": "nightly",
            "url": job_url,
            "buildable": true,
            "nextBuildNumber": 7
        })),
        2,
    )
    .await;
    mock_get(
        &server,
        "/job/nightly/config.xml",
        ResponseTemplate::new(200).set_body_raw(
            "<project><disabled>false</disabled></project>",
            "application/xml",
        ),
        2,
    )
    .await;
    mock_crumb(&server, "token-1", 1).await;
    Mock::given(method("POST"))
        .and(path("/job/nightly/config.xml"))
        .and(CrumbHeader("token-1"))
        .and(body_string_contains("<disabled>true</disabled>"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder(base_url)?.build()?;

        let job = client.jobs().get("nightly")?.expect("job exists");
        assert!(job.buildable);
        assert_eq!(job.next_build_number, 7);

        let xml = job.config_xml()?.expect("config exists");
        assert!(xml.contains("<disabled>false</disabled>"));
        job.update(&xml.replace("false", "true"))?;

        assert_eq!(client.jobs().config_xml("nightly")?, Some(xml));

        let refreshed = job.details()?.expect("still there");
        assert_eq!(refreshed.name, "nightly");
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_execute_script_strips_result_line() -> Result<()> {
    let server = MockServer::start().await;

    mock_crumb(&server, "token-1", 1).await;
    Mock::given(method("POST"))
        .and(path("/scriptText"))
        .and(CrumbHeader("token-1"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("script=println"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello\nResult: [null]\n"))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder(base_url)?.build()?;
        let output = client.system().execute_script("println 'hello'")?;
        assert_eq!(output.as_deref(), Some("hello\n"));
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_post_form_treats_404_as_error() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/computer/ghost/doDelete"))
        .and(NoCrumbHeader)
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder(base_url)?.build()?;
        let err = client.computers().delete_node("ghost").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_computers_swallow_http_errors_and_create_nodes() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/computer/api/json",
        ResponseTemplate::new(200).set_body_json(json!({
            "busyExecutors": 0,
            "totalExecutors": 2,
            "computer": [
                {"displayName": "Built-In Node", "numExecutors": 2, "idle": true},
                {"displayName": "agent 1", "offline": true}
            ]
        })),
        1,
    )
    .await;
    mock_get(&server, "/computer/flaky/api/json", ResponseTemplate::new(500), 1).await;
    mock_get(
        &server,
        "/computer/agent%201/api/json",
        ResponseTemplate::new(200).set_body_json(json!({"displayName": "agent 1", "offline": true})),
        1,
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/computer/doCreateItem"))
        .and(body_string_contains("name=agent-2"))
        .and(body_string_contains("type=hudson.slaves.DumbSlave%24DescriptorImpl"))
        .and(body_string_contains("json="))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder(base_url)?.build()?;

        let computers = client.computers().list()?;
        assert_eq!(computers["built-in node"].display_name, "Built-In Node");
        assert!(computers["agent 1"].offline);

        assert!(client.computers().get("flaky")?.is_none());

        let agent = computers["agent 1"].details()?.expect("agent exists");
        assert!(agent.offline);

        let mut node = Node::new("agent-2").remote_fs("/var/jenkins").num_executors(2);
        node.add_env("JAVA_HOME", "/opt/jdk17");
        client.computers().create_node(&node)?;
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_view_membership_reads_config_xml() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/view/Team/api/json",
        ResponseTemplate::new(200).set_body_json(json!({
            "name": "Team",
            "url": "http://ci/view/Team/",
            "jobs": [{"name": "api build", "url": "http://ci/job/api%20build/"}]
        })),
        1,
    )
    .await;
    mock_get(
        &server,
        "/view/Team/config.xml",
        ResponseTemplate::new(200).set_body_raw(
            "<hudson.model.ListView><name>Team</name><jobNames>\
             <comparator class=\"hudson.util.CaseInsensitiveComparator\"/>\
             <string>api build</string><string>deploy</string>\
             </jobNames></hudson.model.ListView>",
            "text/xml",
        ),
        1,
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/view/Team/addJobToView"))
        .and(query_param("name", "new job"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder(base_url)?.build()?;

        let view = client.views().get("Team")?.expect("view exists");
        assert_eq!(view.jobs[0].name, "api build");
        assert_eq!(view.jobs_on_view()?, ["api build", "deploy"]);
        view.add_job("new job")?;
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_xml_content_type_selects_xml_decoder() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/config.xml",
        ResponseTemplate::new(200).set_body_raw(
            "<hudson><version>2.440</version><numExecutors>2</numExecutors>\
             <useSecurity>true</useSecurity><primaryView>all</primaryView></hudson>",
            "application/xml;charset=UTF-8",
        ),
        1,
    )
    .await;
    mock_get(
        &server,
        "/label/linux/api/json",
        ResponseTemplate::new(200).set_body_json(json!({
            "name": "linux",
            "busyExecutors": 1,
            "totalExecutors": 4,
            "nodes": [{"nodeName": "agent-1"}],
            "tiedJobs": []
        })),
        1,
    )
    .await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder(base_url)?.build()?;

        let config = client.system().master_config()?.expect("config exists");
        assert_eq!(config.version.as_deref(), Some("2.440"));
        assert_eq!(config.num_executors, Some(2));
        assert_eq!(config.use_security, Some(true));

        let label = client.labels().get("linux")?.expect("label exists");
        assert_eq!(label.total_executors, 4);
        assert_eq!(label.nodes[0].node_name, "agent-1");
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_context_path_prefixes_every_request() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/jenkins/api/json",
        ResponseTemplate::new(200).set_body_json(main_view()),
        1,
    )
    .await;
    mock_get(
        &server,
        "/jenkins/job/Foo/api/json",
        ResponseTemplate::new(200).set_body_json(json!({"name": "Foo"})),
        1,
    )
    .await;

    let base_url = format!("{}/jenkins", server.uri());
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder(base_url)?.build()?;
        assert!(client.system().is_running());

        let job = client.jobs().get("Foo")?.expect("job exists");
        assert_eq!(job.name, "Foo");
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_blank_user_sends_no_authorization_and_hook_sees_requests() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/json"))
        .and(NoAuthorization)
        .and(header("X-Trace", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(main_view()))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder(base_url)?
            .auth_basic("  ", "ignored")
            .request_hook(|ctx| {
                if ctx.path() == "/api/json" {
                    ctx.headers
                        .insert("x-trace", http::HeaderValue::from_static("abc"));
                }
                Ok(())
            })
            .build()?;

        let main = client.system().main_view()?.expect("root exists");
        assert!(main.use_crumbs);
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_action_redirect_is_returned_as_success() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(&server, "/crumbIssuer/api/json", ResponseTemplate::new(404), 1).await;
    Mock::given(method("POST"))
        .and(path("/job/x/doDelete"))
        .and(header("Authorization", "Basic dXNlcjp0b2tlbg=="))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/computer/doCreateItem"))
        .and(header("Authorization", "Basic dXNlcjp0b2tlbg=="))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/computer/"))
        .expect(1)
        .mount(&server)
        .await;
    // The landing pages demand credentials; neither may be requested.
    mock_get(&server, "/", ResponseTemplate::new(403), 0).await;
    mock_get(&server, "/computer/", ResponseTemplate::new(403), 0).await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder(base_url)?
            .auth_basic("user", "token")
            .build()?;

        client.jobs().delete("x")?;
        client.computers().create_node(&Node::new("agent-3"))?;
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_protected_posts_map_404_to_none() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(&server, "/crumbIssuer/api/json", ResponseTemplate::new(404), 3).await;
    Mock::given(method("POST"))
        .and(path("/job/gone/config.xml"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/job/gone/submit"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/scriptText"))
        .respond_with(ResponseTemplate::new(200).set_body_string("done\n"))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder(base_url)?.build()?;

        assert!(client.post_xml("/job/gone/config.xml", "<project/>")?.is_none());
        assert!(
            client
                .post::<_, jenkins_remote::Job>("/job/gone/submit", &json!({}))?
                .is_none()
        );
        assert_eq!(
            client.execute_script("println 'done'")?.as_deref(),
            Some("done\n")
        );
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_is_running_is_false_when_unreachable() -> Result<()> {
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder("http://127.0.0.1:9/")?
            .connect_timeout(std::time::Duration::from_millis(200))
            .build()?;
        assert!(!client.system().is_running());
        Ok(())
    })
    .await??;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_post_attaches_crumb_and_decodes_response() -> Result<()> {
    let server = MockServer::start().await;

    mock_crumb(&server, "token-9", 1).await;
    Mock::given(method("POST"))
        .and(path("/job/demo/submit"))
        .and(CrumbHeader("token-9"))
        .and(header("Content-Type", "application/json"))
        .and(body_string(r#"{"param":"value"}"#))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"name": "demo", "url": "http://ci/job/demo/"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder(server.uri())?.build()?;
    let job = client
        .post::<_, jenkins_remote::Job>("/job/demo/submit", &json!({"param": "value"}))
        .await?
        .expect("decoded body");
    assert_eq!(job.name, "demo");

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_jobs_get_propagates_errors_but_maps_404_to_none() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(&server, "/job/gone/api/json", ResponseTemplate::new(404), 1).await;
    mock_get(
        &server,
        "/job/locked/api/json",
        ResponseTemplate::new(403).set_body_string("token=secret-token"),
        1,
    )
    .await;

    let client = Client::builder(server.uri())?
        .auth_basic("user", "secret-token")
        .build()?;

    assert!(client.jobs().get("gone").await?.is_none());

    let err = client.jobs().get("locked").await.unwrap_err();
    assert!(err.is_auth_error());
    let snippet = err
        .http()
        .and_then(|e| e.body_snippet.as_deref())
        .unwrap_or_default();
    assert!(!snippet.contains("secret-token"));

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_chained_delete_goes_through_job_url() -> Result<()> {
    let server = MockServer::start().await;
    let job_url = format!("{}/job/Foo/", server.uri());

    mock_get(
        &server,
        "/api/json",
        ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [{"name": "Foo", "url": job_url}]
        })),
        1,
    )
    .await;
    mock_crumb(&server, "token-1", 1).await;
    Mock::given(method("POST"))
        .and(path("/job/Foo/doDelete"))
        .and(CrumbHeader("token-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder(server.uri())?.build()?;
    let jobs = client.jobs().list().await?;
    jobs["foo"].delete().await?;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_action_redirect_keeps_credentials_on_same_host() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(&server, "/crumbIssuer/api/json", ResponseTemplate::new(404), 1).await;
    Mock::given(method("POST"))
        .and(path("/job/x/doDelete"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("Authorization", "Basic dXNlcjp0b2tlbg=="))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder(server.uri())?
        .auth_basic("user", "token")
        .build()?;
    client.jobs().delete("x").await?;

    server.verify().await;
    Ok(())
}
