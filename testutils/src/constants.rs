pub const TEST_NAMESPACE: &str = "test-namespace";
pub const TEST_POD: &str = "stuck-pod";
pub const TEST_DEPLOYMENT: &str = "stuck-deployment";
pub const TEST_WIDGET: &str = "stuck-widget";
pub const TEST_STUCK_NS_NAME: &str = "stuck-ns";
pub const TEST_NS_FINALIZER: &str = "kubernetes";
pub const TEST_DELETION_TIMESTAMP: &str = "2024-01-01T00:00:00Z";
